use crate::domain::StepDomain;
use ahash::AHashSet;
use itertools::Itertools;

/// Builds the canonical key for two selections, `stepA:valueA-stepB:valueB`.
///
/// Callers pass the selections in step-list order; the key is not sorted.
pub fn pair_key(step_a: &str, value_a: &str, step_b: &str, value_b: &str) -> String {
    format!("{}:{}-{}:{}", step_a, value_a, step_b, value_b)
}

/// All pair keys of one assignment, for every position pair `i < j`.
pub fn pair_keys(domains: &[StepDomain], indices: &[usize]) -> Vec<String> {
    (0..domains.len())
        .tuple_combinations()
        .map(|(i, j)| {
            let (a, b) = (&domains[i], &domains[j]);
            pair_key(
                &a.step_name,
                &a.entries[indices[i]].value,
                &b.step_name,
                &b.entries[indices[j]].value,
            )
        })
        .collect()
}

/// Number of distinct pair keys any assignment over `domains` can produce.
pub fn possible_pair_count(domains: &[StepDomain]) -> usize {
    let mut keys = AHashSet::new();
    for (a, b) in domains.iter().tuple_combinations() {
        for (ea, eb) in a.entries.iter().cartesian_product(b.entries.iter()) {
            keys.insert(pair_key(&a.step_name, &ea.value, &b.step_name, &eb.value));
        }
    }
    keys.len()
}

/// Set of pair keys covered so far. Only ever grows.
#[derive(Debug, Default)]
pub struct CoverageTracker {
    covered: AHashSet<String>,
}

impl CoverageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.covered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.covered.contains(key)
    }

    /// Keys from `candidates` that are not covered yet, without duplicates.
    pub fn uncovered(&self, candidates: Vec<String>) -> Vec<String> {
        candidates
            .into_iter()
            .filter(|k| !self.covered.contains(k))
            .unique()
            .collect()
    }

    pub fn cover(&mut self, keys: impl IntoIterator<Item = String>) {
        self.covered.extend(keys);
    }
}
