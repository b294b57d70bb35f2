//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kumiawase crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumiawase::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = PairwiseDocument::from_file("path/to/cases.json")?;
//! let session = Session::from_document(document).regenerate()?;
//!
//! println!("{}", TableFormatter::format(session.steps(), session.results()));
//! # Ok(())
//! # }
//! ```

// Step model
pub use crate::step::{IntoSteps, Step, StepValue, Tag};

// Engine
pub use crate::domain::{DomainEntry, StepDomain, build_domains};
pub use crate::generator::{Generation, Generator};
pub use crate::selector::{PairwiseResult, PairwiseSelector, SelectionReport, select_pairwise};
pub use crate::session::Session;

// Export and import
pub use crate::export::{PairwiseDocument, TableFormatter, to_csv, write_csv};

// Error types
pub use crate::error::{ExportError, GenerationError, ImportError};

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
