//! Error types produced by the catalog crate.
//!
//! | Error | Fatal | Description |
//! |-------|-------|-------------|
//! | [`SourceUnavailable`](LoadError::SourceUnavailable) | yes | A group of units could not be enumerated |
//! | [`UnitParseFailed`](LoadError::UnitParseFailed) | no | One unit was unreadable or malformed; logged and skipped |
//! | [`Cancelled`](LoadError::Cancelled) | yes | The caller raised the cancel flag |
//! | [`DeadlineExceeded`](LoadError::DeadlineExceeded) | yes | The load ran past its deadline |
//!
//! [`Loader::load`](crate::Loader::load) never returns `UnitParseFailed`; the
//! variant exists so skipped units are reported with the same formatting as
//! every other load diagnostic.

use thiserror::Error;

use crate::source::Group;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("{group} source unavailable at {source_name}: {reason}")]
    SourceUnavailable {
        group: Group,
        source_name: String,
        reason: String,
    },
    #[error("failed to parse unit {unit}: {reason}")]
    UnitParseFailed { unit: String, reason: String },
    #[error("catalog load cancelled")]
    Cancelled,
    #[error("catalog load exceeded its deadline")]
    DeadlineExceeded,
}
