//! # Prompt Catalog (`catalog`)
//!
//! ## Purpose
//!
//! `catalog` turns a set of static data units into the two in-memory datasets
//! the search service answers queries against: prompt records and question
//! records. It has no notion of queries; the `matcher` crate consumes what it
//! produces.
//!
//! ## Core Types
//!
//! - [`ResourceSource`]: where data units come from. [`DirectorySource`] reads
//!   `roles/*.json` and `questions/*.json` under a root directory;
//!   [`StaticSource`] serves units from memory.
//! - [`Loader`]: reads every unit, skips malformed ones, and returns a
//!   [`Catalog`] snapshot.
//! - [`LoadControl`]: optional deadline and cancel flag for a load.
//! - [`LoadError`]: fatal load failures (plus the non-fatal per-unit variant
//!   used in diagnostics).
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Group, Loader, StaticSource};
//!
//! let source = StaticSource::new()
//!     .with_unit(
//!         Group::Prompts,
//!         "science.json",
//!         r#"[{"id":"p-1","category":"Science","system_message":"You are a physics tutor"}]"#,
//!     )
//!     .with_unit(Group::Questions, "geo.json", r#"[{"id":"q-1","Q":"What is the capital of France?"}]"#);
//!
//! let catalog = Loader::new(source).load().expect("load");
//! assert_eq!(catalog.prompt_count(), 1);
//! assert_eq!(catalog.question_count(), 1);
//! ```

pub mod error;
pub mod loader;
pub mod source;
pub mod types;

pub use crate::error::LoadError;
pub use crate::loader::{load, LoadControl, Loader};
pub use crate::source::{DirectorySource, Group, ResourceSource, StaticSource};
pub use crate::types::{Catalog, PromptRecord, QuestionRecord};
