//! Greedy pairwise selection over the cross-product of step domains.
use crate::domain::StepDomain;
use tracing::debug;

mod coverage;
mod product;
mod result;

pub use coverage::{CoverageTracker, pair_key, pair_keys, possible_pair_count};
pub use product::{Assignment, CrossProduct, enumerate_assignments};
pub use result::{DESCRIPTION_SEPARATOR, PairwiseResult};

/// Maximum number of results a selection run emits unless configured otherwise.
pub const DEFAULT_CAP: usize = 50;

/// Statistics gathered while selecting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionReport {
    /// Size of the full cross-product.
    pub total_assignments: u128,
    /// Assignments visited before selection stopped.
    pub assignments_examined: u128,
    /// Distinct pair keys the domains can produce.
    pub possible_pairs: usize,
    /// Size of the covered set after each accepted assignment.
    pub coverage_progress: Vec<usize>,
    /// True when selection stopped on the cap rather than on exhaustion.
    pub cap_reached: bool,
}

impl SelectionReport {
    pub fn covered_pairs(&self) -> usize {
        self.coverage_progress.last().copied().unwrap_or(0)
    }

    /// Fraction of possible pairs covered. `1.0` when no pairs exist.
    pub fn coverage_ratio(&self) -> f64 {
        if self.possible_pairs == 0 {
            1.0
        } else {
            self.covered_pairs() as f64 / self.possible_pairs as f64
        }
    }

    /// True when some possible pair never made it into a selected case.
    pub fn is_incomplete(&self) -> bool {
        self.covered_pairs() < self.possible_pairs
    }
}

/// Single-pass, first-fit pairwise selector.
///
/// Assignments are visited in odometer order. One is accepted when it covers
/// at least one pair not seen before, or when nothing has been accepted yet.
/// Selection stops once `min(total_assignments, cap)` cases are accepted.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseSelector {
    cap: usize,
}

impl Default for PairwiseSelector {
    fn default() -> Self {
        Self { cap: DEFAULT_CAP }
    }
}

impl PairwiseSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output cap. A cap of zero is raised to one.
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap.max(1);
        self
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn select(&self, domains: &[StepDomain]) -> Vec<PairwiseResult> {
        self.select_with_report(domains).0
    }

    /// Runs the selection and returns the results with run statistics.
    ///
    /// An empty domain sequence yields no results.
    pub fn select_with_report(
        &self,
        domains: &[StepDomain],
    ) -> (Vec<PairwiseResult>, SelectionReport) {
        let total = CrossProduct::cardinality(domains);
        let mut report = SelectionReport {
            total_assignments: total,
            possible_pairs: possible_pair_count(domains),
            ..SelectionReport::default()
        };
        let limit = total.min(self.cap as u128) as usize;
        let mut tracker = CoverageTracker::new();
        let mut selected: Vec<PairwiseResult> = Vec::new();

        if limit == 0 {
            return (selected, report);
        }

        debug!(
            steps = domains.len(),
            total_assignments = %total,
            possible_pairs = report.possible_pairs,
            limit,
            "starting pairwise selection"
        );

        for indices in CrossProduct::new(domains) {
            report.assignments_examined += 1;

            let fresh = tracker.uncovered(pair_keys(domains, &indices));
            if fresh.is_empty() && !selected.is_empty() {
                continue;
            }

            tracker.cover(fresh);
            selected.push(Assignment::from_indices(domains, &indices).into());
            report.coverage_progress.push(tracker.len());

            if selected.len() >= limit {
                report.cap_reached = (limit as u128) < total;
                break;
            }
        }

        debug!(
            selected = selected.len(),
            examined = %report.assignments_examined,
            covered_pairs = tracker.len(),
            "pairwise selection finished"
        );

        (selected, report)
    }
}

/// Selects pairwise results with the default cap of 50.
pub fn select_pairwise(domains: &[StepDomain]) -> Vec<PairwiseResult> {
    PairwiseSelector::default().select(domains)
}
