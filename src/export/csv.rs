use super::{DESCRIPTION_COLUMN, step_columns};
use crate::error::ExportError;
use crate::selector::PairwiseResult;
use crate::step::Step;
use itertools::Itertools;
use std::fs;
use tracing::debug;

/// Serializes results as delimited text, one row per result.
///
/// Columns are the step names in original order followed by `Description`.
/// Every field is double-quoted and embedded quotes are doubled. A result
/// without a value for some step gets an empty field there.
pub fn to_csv(steps: &[Step], results: &[PairwiseResult]) -> String {
    let columns = step_columns(steps);

    let header = columns
        .iter()
        .copied()
        .chain(std::iter::once(DESCRIPTION_COLUMN))
        .map(quote)
        .join(",");

    let rows = results.iter().map(|result| {
        columns
            .iter()
            .map(|name| result.value(name).unwrap_or_default())
            .chain(std::iter::once(result.description.as_str()))
            .map(quote)
            .join(",")
    });

    std::iter::once(header).chain(rows).join("\n")
}

/// Writes [`to_csv`] output to `path`.
pub fn write_csv(path: &str, steps: &[Step], results: &[PairwiseResult]) -> Result<(), ExportError> {
    let content = to_csv(steps, results);
    fs::write(path, &content).map_err(|e| ExportError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    debug!(path, rows = results.len(), bytes = content.len(), "wrote csv export");
    Ok(())
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
