use super::definition::Step;
use crate::error::ImportError;

/// A trait for custom data models that can be converted into Kumiawase `Step`s.
///
/// Implement it on whatever your form layer or file format produces to hand the
/// steps to the generator without going through the JSON document.
///
/// # Example
///
/// ```rust,no_run
/// use kumiawase::prelude::*;
/// use kumiawase::error::ImportError;
///
/// struct Column { header: String, cells: Vec<String> }
/// struct Sheet { columns: Vec<Column> }
///
/// impl IntoSteps for Sheet {
///     fn into_steps(self) -> Result<Vec<Step>, ImportError> {
///         Ok(self
///             .columns
///             .into_iter()
///             .map(|c| Step::new(c.header).with_values(c.cells, Tag::Green))
///             .collect())
///     }
/// }
/// ```
pub trait IntoSteps {
    /// Consumes the object and converts it into an ordered step sequence.
    fn into_steps(self) -> Result<Vec<Step>, ImportError>;
}

impl IntoSteps for Vec<Step> {
    fn into_steps(self) -> Result<Vec<Step>, ImportError> {
        Ok(self)
    }
}
