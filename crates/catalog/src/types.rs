//! Record types held by the catalog.
//!
//! These are the persisted shapes read from the resource files. Match
//! annotations are not part of them; the matcher attaches those to its own
//! result values.
//!
//! # Type Hierarchy
//!
//! ```text
//! Catalog
//! ├── prompts: Vec<PromptRecord>
//! │   ├── id: String
//! │   ├── category / subcategory: String
//! │   ├── system_message: String
//! │   ├── keywords: Vec<String>
//! │   └── topic: String
//! └── questions: Vec<QuestionRecord>
//!     ├── id: String
//!     └── question_text: String   ("Q" on the wire)
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// A role/persona definition.
///
/// Every field defaults when absent so partially filled resource files still
/// load. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default, alias = "systemMessage")]
    pub system_message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub topic: String,
}

/// A standalone question entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "Q", alias = "q")]
    pub question_text: String,
}

/// Immutable snapshot of both datasets.
///
/// Produced whole by [`Loader`](crate::Loader) and never mutated afterwards;
/// replacing the data means building a new `Catalog`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub prompts: Vec<PromptRecord>,
    pub questions: Vec<QuestionRecord>,
}

impl Catalog {
    pub fn new(prompts: Vec<PromptRecord>, questions: Vec<QuestionRecord>) -> Self {
        Self { prompts, questions }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty() && self.questions.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
