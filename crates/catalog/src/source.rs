//! Resource sources the loader reads from.
//!
//! A source exposes two independent groups of data units, one per record type.
//! Each unit is expected to hold a JSON array of records. [`DirectorySource`]
//! reads them from disk and [`StaticSource`] serves them from memory, which is
//! how tests substitute fixtures without touching the filesystem.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// The two record groups a source provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Prompts,
    Questions,
}

impl Group {
    /// Subdirectory name used by [`DirectorySource`] when none is configured.
    pub fn default_dir(self) -> &'static str {
        match self {
            Group::Prompts => "roles",
            Group::Questions => "questions",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Prompts => write!(f, "prompts"),
            Group::Questions => write!(f, "questions"),
        }
    }
}

/// Supplier of raw data units.
///
/// Implementations must be safe to share across threads; the loader only ever
/// reads from them.
pub trait ResourceSource: Send + Sync {
    /// Enumerate the units of `group`, in the order they should be loaded.
    ///
    /// Failing here is fatal for the whole load.
    fn list_units(&self, group: Group) -> Result<Vec<String>, LoadError>;

    /// Read the raw bytes of one unit previously returned by [`list_units`](Self::list_units).
    fn read_unit(&self, group: Group, name: &str) -> io::Result<Vec<u8>>;

    /// Human-readable origin, used in diagnostics.
    fn describe(&self) -> String;
}

impl<S: ResourceSource + ?Sized> ResourceSource for &S {
    fn list_units(&self, group: Group) -> Result<Vec<String>, LoadError> {
        (**self).list_units(group)
    }

    fn read_unit(&self, group: Group, name: &str) -> io::Result<Vec<u8>> {
        (**self).read_unit(group, name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reads `<root>/<prompts_dir>/*.json` and `<root>/<questions_dir>/*.json`.
///
/// Subdirectories and files without a `.json` extension are not units. Units
/// are listed in file-name order so loads are reproducible.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    prompts_dir: String,
    questions_dir: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prompts_dir: Group::Prompts.default_dir().to_string(),
            questions_dir: Group::Questions.default_dir().to_string(),
        }
    }

    /// Override the subdirectory holding prompt units.
    pub fn with_prompts_dir(mut self, dir: impl Into<String>) -> Self {
        self.prompts_dir = dir.into();
        self
    }

    /// Override the subdirectory holding question units.
    pub fn with_questions_dir(mut self, dir: impl Into<String>) -> Self {
        self.questions_dir = dir.into();
        self
    }

    pub fn group_dir(&self, group: Group) -> PathBuf {
        match group {
            Group::Prompts => self.root.join(&self.prompts_dir),
            Group::Questions => self.root.join(&self.questions_dir),
        }
    }
}

impl ResourceSource for DirectorySource {
    fn list_units(&self, group: Group) -> Result<Vec<String>, LoadError> {
        let dir = self.group_dir(group);
        let unavailable = |err: io::Error| LoadError::SourceUnavailable {
            group,
            source_name: dir.display().to_string(),
            reason: err.to_string(),
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_unit(&self, group: Group, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.group_dir(group).join(name))
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// In-memory units, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    units: Vec<(Group, String, Vec<u8>)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit to `group`.
    pub fn with_unit(mut self, group: Group, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.units.push((group, name.into(), data.into()));
        self
    }

    pub fn with_prompts(self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.with_unit(Group::Prompts, name, data)
    }

    pub fn with_questions(self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.with_unit(Group::Questions, name, data)
    }
}

impl ResourceSource for StaticSource {
    fn list_units(&self, group: Group) -> Result<Vec<String>, LoadError> {
        Ok(self
            .units
            .iter()
            .filter(|(g, _, _)| *g == group)
            .map(|(_, name, _)| name.clone())
            .collect())
    }

    fn read_unit(&self, group: Group, name: &str) -> io::Result<Vec<u8>> {
        self.units
            .iter()
            .find(|(g, n, _)| *g == group && n == name)
            .map(|(_, _, data)| data.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no unit named {name}")))
    }

    fn describe(&self) -> String {
        format!("static source ({} units)", self.units.len())
    }
}
