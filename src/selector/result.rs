use super::product::Assignment;
use crate::step::Tag;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Separator between per-step descriptions in [`PairwiseResult::description`].
pub const DESCRIPTION_SEPARATOR: &str = " | ";

/// One selected test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseResult {
    /// Step name -> chosen value, in step order.
    pub values: IndexMap<String, String>,
    /// Human-readable summary of the whole case.
    pub description: String,
    /// Step name -> tag of the chosen value, kept for display coloring.
    pub tags: IndexMap<String, Tag>,
}

impl PairwiseResult {
    pub fn value(&self, step_name: &str) -> Option<&str> {
        self.values.get(step_name).map(String::as_str)
    }

    pub fn tag(&self, step_name: &str) -> Option<Tag> {
        self.tags.get(step_name).copied()
    }
}

impl From<Assignment> for PairwiseResult {
    fn from(assignment: Assignment) -> Self {
        Self {
            description: assignment.descriptions.iter().join(DESCRIPTION_SEPARATOR),
            values: assignment.values,
            tags: assignment.tags,
        }
    }
}
