use crate::domain::StepDomain;
use crate::step::Tag;
use indexmap::IndexMap;

/// Odometer over the cross-product of a domain sequence.
///
/// Yields one index vector per assignment, where `indices[i]` selects an entry
/// of `domains[i]`. The last position varies fastest, so assignments come out
/// in lexicographic order of the domain sequence.
#[derive(Debug, Clone)]
pub struct CrossProduct {
    radices: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl CrossProduct {
    pub fn new(domains: &[StepDomain]) -> Self {
        let radices: Vec<usize> = domains.iter().map(StepDomain::len).collect();
        let current = if radices.is_empty() || radices.contains(&0) {
            None
        } else {
            Some(vec![0; radices.len()])
        };
        Self { radices, current }
    }

    /// Number of assignments the odometer will yield, saturating at `u128::MAX`.
    pub fn cardinality(domains: &[StepDomain]) -> u128 {
        if domains.is_empty() {
            return 0;
        }
        domains
            .iter()
            .fold(1u128, |acc, d| acc.saturating_mul(d.len() as u128))
    }

    fn advance(&mut self) {
        let Some(indices) = self.current.as_mut() else {
            return;
        };
        for pos in (0..indices.len()).rev() {
            indices[pos] += 1;
            if indices[pos] < self.radices[pos] {
                return;
            }
            indices[pos] = 0;
        }
        // Every position rolled over.
        self.current = None;
    }
}

impl Iterator for CrossProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current.clone()?;
        self.advance();
        Some(out)
    }
}

/// One full choice of a value for every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Step name -> chosen value. A repeated step name keeps its first
    /// position and the value of its last occurrence.
    pub values: IndexMap<String, String>,
    /// Step name -> tag of the chosen value, parallel to `values`.
    pub tags: IndexMap<String, Tag>,
    /// Per-step descriptions, index-aligned with the domain sequence.
    pub descriptions: Vec<String>,
}

impl Assignment {
    /// Materializes the assignment selected by an odometer index vector.
    pub fn from_indices(domains: &[StepDomain], indices: &[usize]) -> Self {
        let mut values = IndexMap::with_capacity(domains.len());
        let mut tags = IndexMap::with_capacity(domains.len());
        let mut descriptions = Vec::with_capacity(domains.len());

        for (domain, &idx) in domains.iter().zip(indices) {
            let entry = &domain.entries[idx];
            values.insert(domain.step_name.clone(), entry.value.clone());
            tags.insert(domain.step_name.clone(), entry.tag);
            descriptions.push(entry.description.clone());
        }

        Self {
            values,
            tags,
            descriptions,
        }
    }
}

/// Enumerates the full cross-product as materialized assignments.
///
/// The result grows with the product of the domain sizes; prefer
/// [`CrossProduct`] when only the order or the count is needed.
pub fn enumerate_assignments(domains: &[StepDomain]) -> Vec<Assignment> {
    CrossProduct::new(domains)
        .map(|indices| Assignment::from_indices(domains, &indices))
        .collect()
}
