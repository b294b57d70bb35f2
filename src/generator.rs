use crate::domain::{StepDomain, build_domains};
use crate::error::GenerationError;
use crate::selector::{CrossProduct, DEFAULT_CAP, PairwiseResult, PairwiseSelector, SelectionReport};
use crate::step::Step;
use tracing::{debug, info, warn};

/// The output of a generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub domains: Vec<StepDomain>,
    pub results: Vec<PairwiseResult>,
    pub report: SelectionReport,
}

/// Runs the full pipeline: steps -> domains -> cross-product -> selection.
///
/// A `Generator` owns a snapshot of the steps it was built with and can be run
/// any number of times; identical input always produces identical output.
pub struct Generator {
    steps: Vec<Step>,
    selector: PairwiseSelector,
    assignment_limit: Option<u128>,
}

pub struct GeneratorBuilder {
    steps: Vec<Step>,
    cap: usize,
    assignment_limit: Option<u128>,
}

impl GeneratorBuilder {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            cap: DEFAULT_CAP,
            assignment_limit: None,
        }
    }

    /// Overrides the maximum number of selected cases (default 50).
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Rejects inputs whose cross-product exceeds `limit` assignments.
    pub fn with_assignment_limit(mut self, limit: u128) -> Self {
        self.assignment_limit = Some(limit);
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            steps: self.steps,
            selector: PairwiseSelector::new().with_cap(self.cap),
            assignment_limit: self.assignment_limit,
        }
    }
}

impl Generator {
    pub fn builder(steps: Vec<Step>) -> GeneratorBuilder {
        GeneratorBuilder::new(steps)
    }

    /// Builds a generator with default settings.
    pub fn new(steps: Vec<Step>) -> Self {
        GeneratorBuilder::new(steps).build()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Generates the pairwise case set.
    ///
    /// # Returns
    ///
    /// * `Ok(Generation)`: at least one result whenever at least one step exists.
    /// * `Err(GenerationError::NoSteps)`: the step sequence is empty.
    /// * `Err(GenerationError::TooManyAssignments)`: an assignment limit is set
    ///   and the cross-product is larger.
    pub fn generate(&self) -> Result<Generation, GenerationError> {
        if self.steps.is_empty() {
            return Err(GenerationError::NoSteps);
        }

        let domains = build_domains(&self.steps);
        debug!(
            steps = domains.len(),
            synthetic = domains.iter().filter(|d| d.is_synthetic()).count(),
            "built step domains"
        );

        if let Some(limit) = self.assignment_limit {
            let count = CrossProduct::cardinality(&domains);
            if count > limit {
                return Err(GenerationError::TooManyAssignments { count, limit });
            }
        }

        let (results, report) = self.selector.select_with_report(&domains);

        if report.cap_reached && report.is_incomplete() {
            warn!(
                cap = self.selector.cap(),
                covered_pairs = report.covered_pairs(),
                possible_pairs = report.possible_pairs,
                "selection cap reached before all pairs were covered"
            );
        }
        info!(
            results = results.len(),
            total_assignments = %report.total_assignments,
            coverage = report.coverage_ratio(),
            "generated pairwise cases"
        );

        Ok(Generation {
            domains,
            results,
            report,
        })
    }
}
