use super::{DESCRIPTION_COLUMN, step_columns};
use crate::selector::PairwiseResult;
use crate::step::Step;
use itertools::Itertools;

/// Formats results into a fixed-width text table for terminals.
pub struct TableFormatter;

impl TableFormatter {
    /// Renders one row per result with a `#` column, one column per step and
    /// the description. Value cells carry their tag marker, e.g. `Chrome [G]`.
    pub fn format(steps: &[Step], results: &[PairwiseResult]) -> String {
        let columns = step_columns(steps);

        let mut header: Vec<String> = vec!["#".to_string()];
        header.extend(columns.iter().map(|c| c.to_string()));
        header.push(DESCRIPTION_COLUMN.to_string());

        let rows: Vec<Vec<String>> = results
            .iter()
            .enumerate()
            .map(|(i, result)| {
                let mut row = vec![(i + 1).to_string()];
                row.extend(columns.iter().map(|name| Self::format_cell(result, name)));
                row.push(result.description.clone());
                row
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                std::iter::once(&header)
                    .chain(rows.iter())
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let separator = widths.iter().map(|w| "-".repeat(*w)).join("-+-");

        std::iter::once(Self::format_row(&header, &widths))
            .chain(std::iter::once(separator))
            .chain(rows.iter().map(|row| Self::format_row(row, &widths)))
            .join("\n")
    }

    fn format_cell(result: &PairwiseResult, step_name: &str) -> String {
        match (result.value(step_name), result.tag(step_name)) {
            (Some(value), Some(tag)) => format!("{} [{}]", value, tag.marker()),
            (Some(value), None) => value.to_string(),
            (None, _) => String::new(),
        }
    }

    fn format_row(cells: &[String], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .join(" | ")
            .trim_end()
            .to_string()
    }
}
