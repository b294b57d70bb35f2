//! Collaborators that turn results into files and views, and load them back.
pub mod csv;
pub mod document;
pub mod table;

pub use csv::{to_csv, write_csv};
pub use document::PairwiseDocument;
pub use table::TableFormatter;

use crate::step::Step;
use itertools::Itertools;

/// Header of the trailing description column in tabular exports.
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Step names in original order, keeping the first occurrence of a repeated name.
pub(crate) fn step_columns(steps: &[Step]) -> Vec<&str> {
    steps.iter().map(|s| s.name.as_str()).unique().collect()
}
