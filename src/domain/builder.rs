use super::{DomainEntry, StepDomain};
use crate::step::{Step, Tag};

/// Transforms step definitions into per-step value domains.
///
/// Blank values are dropped. A step left without values gets a single
/// synthetic entry named after the step, tagged `Yellow`, so every domain
/// holds at least one entry and the cross-product is never empty.
pub fn build_domains(steps: &[Step]) -> Vec<StepDomain> {
    steps.iter().map(build_domain).collect()
}

fn build_domain(step: &Step) -> StepDomain {
    let mut entries: Vec<DomainEntry> = step
        .effective_values()
        .map(|(payload, tag)| DomainEntry {
            value: payload.to_string(),
            tag,
            description: format!("{}: {}", step.name, payload),
        })
        .collect();

    if entries.is_empty() {
        entries.push(DomainEntry {
            value: step.name.clone(),
            tag: Tag::Yellow,
            description: step.name.clone(),
        });
    }

    StepDomain {
        step_name: step.name.clone(),
        entries,
    }
}
