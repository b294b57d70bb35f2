use crate::error::GenerationError;
use crate::export::PairwiseDocument;
use crate::generator::{Generator, GeneratorBuilder};
use crate::selector::PairwiseResult;
use crate::step::Step;
use std::sync::Arc;

/// A revisioned snapshot of the steps and the results generated from them.
///
/// Sessions are never mutated in place. Every edit returns a new session with
/// a higher revision; results always belong to the steps they were generated
/// from, and a regeneration replaces the previous result set wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    revision: u64,
    steps: Arc<[Step]>,
    results: Arc<[PairwiseResult]>,
}

impl Session {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            revision: 0,
            steps: steps.into(),
            results: Vec::new().into(),
        }
    }

    /// Restores a session from a loaded document, keeping its stored results.
    pub fn from_document(document: PairwiseDocument) -> Self {
        Self {
            revision: 0,
            steps: document.steps.into(),
            results: document.pairwise_results.into(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn results(&self) -> &[PairwiseResult] {
        &self.results
    }

    /// Replaces the steps. Results generated from the old steps are dropped.
    pub fn with_steps(&self, steps: Vec<Step>) -> Self {
        Self {
            revision: self.revision + 1,
            steps: steps.into(),
            results: Vec::new().into(),
        }
    }

    /// Generates a fresh result set with default generator settings.
    pub fn regenerate(&self) -> Result<Self, GenerationError> {
        self.regenerate_with(|builder| builder)
    }

    /// Generates a fresh result set, letting the caller tune the generator.
    pub fn regenerate_with(
        &self,
        configure: impl FnOnce(GeneratorBuilder) -> GeneratorBuilder,
    ) -> Result<Self, GenerationError> {
        let generator = configure(Generator::builder(self.steps.to_vec())).build();
        let generation = generator.generate()?;
        Ok(Self {
            revision: self.revision + 1,
            steps: Arc::clone(&self.steps),
            results: generation.results.into(),
        })
    }

    /// Wraps the current snapshot in a new export document.
    pub fn to_document(&self) -> PairwiseDocument {
        PairwiseDocument::new(self.steps.to_vec(), self.results.to_vec())
    }
}
