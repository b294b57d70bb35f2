//! # Kumiawase - Pairwise Combination Engine
//!
//! **Kumiawase** reduces a matrix of test steps and candidate values to a small
//! set of test cases in which every pair of values from two different steps
//! appears together at least once (pairwise, or 2-way, coverage).
//!
//! ## Core Workflow
//!
//! 1.  **Describe Your Steps**: Build `Step`s directly, load them from JSON, or
//!     implement the `IntoSteps` trait for your own format.
//! 2.  **Build Domains**: Blank values are dropped and a step without values
//!     falls back to a single synthetic value named after the step.
//! 3.  **Select**: The cross-product of all domains is walked in odometer order
//!     and an assignment is kept whenever it covers a pair not seen before,
//!     up to a cap of 50 cases.
//! 4.  **Export**: Render the results as a text table, CSV, or a JSON document
//!     that can be imported again later.
//!
//! The selection is a greedy first-fit heuristic. It is deterministic, but it
//! does not produce a minimal covering array, and the cross-product it walks
//! grows with the product of the domain sizes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kumiawase::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let steps = vec![
//!         Step::new("Browser").with_values(["Chrome", "Firefox"], Tag::Green),
//!         Step::new("OS").with_values(["Windows", "Mac"], Tag::Yellow),
//!         Step::new("Login"),
//!     ];
//!
//!     let generation = Generator::builder(steps.clone()).with_cap(50).build().generate()?;
//!
//!     println!("{}", TableFormatter::format(&steps, &generation.results));
//!     println!(
//!         "Covered {}/{} pairs",
//!         generation.report.covered_pairs(),
//!         generation.report.possible_pairs
//!     );
//!
//!     PairwiseDocument::new(steps, generation.results).save("cases.json")?;
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod error;
pub mod export;
pub mod generator;
pub mod prelude;
pub mod selector;
pub mod session;
pub mod step;
