use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::source::{Group, ResourceSource};
use crate::types::{Catalog, PromptRecord, QuestionRecord};

/// Caller-supplied bounds on a load.
///
/// Both the cancel flag and the deadline are checked before each unit is read,
/// so a load stops within one unit of being told to.
#[derive(Debug, Clone, Default)]
pub struct LoadControl {
    deadline: Option<Instant>,
    cancelled: Arc<AtomicBool>,
}

impl LoadControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Raise the cancel flag. Every clone of this control observes it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn check(&self) -> Result<(), LoadError> {
        if self.is_cancelled() {
            return Err(LoadError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(LoadError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

/// Builds a [`Catalog`] from a [`ResourceSource`].
#[derive(Debug, Clone)]
pub struct Loader<S> {
    source: S,
}

impl<S: ResourceSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load both groups with no deadline.
    pub fn load(&self) -> Result<Catalog, LoadError> {
        self.load_with(&LoadControl::default())
    }

    /// Load both groups, honouring `control`.
    ///
    /// Malformed units are skipped with a warning. Only enumeration failures,
    /// cancellation and the deadline abort the load.
    pub fn load_with(&self, control: &LoadControl) -> Result<Catalog, LoadError> {
        let prompts: Vec<PromptRecord> = self.load_group(Group::Prompts, control)?;
        let questions: Vec<QuestionRecord> = self.load_group(Group::Questions, control)?;

        tracing::info!(
            source = %self.source.describe(),
            prompts = prompts.len(),
            questions = questions.len(),
            "catalog loaded"
        );

        Ok(Catalog::new(prompts, questions))
    }

    fn load_group<T: DeserializeOwned>(
        &self,
        group: Group,
        control: &LoadControl,
    ) -> Result<Vec<T>, LoadError> {
        control.check()?;
        let units = self.source.list_units(group)?;

        let mut records = Vec::new();
        for name in units {
            control.check()?;
            match self.read_and_parse::<T>(group, &name) {
                Ok(mut parsed) => records.append(&mut parsed),
                Err(err) => {
                    tracing::warn!(group = %group, unit = %name, error = %err, "skipping unit");
                }
            }
        }
        Ok(records)
    }

    fn read_and_parse<T: DeserializeOwned>(
        &self,
        group: Group,
        name: &str,
    ) -> Result<Vec<T>, LoadError> {
        let failed = |reason: String| LoadError::UnitParseFailed {
            unit: format!("{group}/{name}"),
            reason,
        };
        let data = self
            .source
            .read_unit(group, name)
            .map_err(|e| failed(e.to_string()))?;
        serde_json::from_slice(&data).map_err(|e| failed(e.to_string()))
    }
}

/// Load a catalog from `source` in one call.
pub fn load<S: ResourceSource>(source: S) -> Result<Catalog, LoadError> {
    Loader::new(source).load()
}
