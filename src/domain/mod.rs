mod builder;

pub use builder::build_domains;

use crate::step::Tag;
use serde::{Deserialize, Serialize};

/// One choice available to a step after blank filtering and the name fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub value: String,
    pub tag: Tag,
    pub description: String,
}

/// The effective list of choices for one step. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDomain {
    pub step_name: String,
    pub entries: Vec<DomainEntry>,
}

impl StepDomain {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the domain holds only the step-name fallback entry.
    pub fn is_synthetic(&self) -> bool {
        matches!(self.entries.as_slice(), [only] if only.value == self.step_name && only.description == self.step_name)
    }
}
