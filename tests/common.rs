//! Common test utilities for building step definitions.
use kumiawase::prelude::*;

/// Creates a step whose values all share one tag.
#[allow(dead_code)]
pub fn step(name: &str, values: &[&str], tag: Tag) -> Step {
    Step::new(name).with_values(values.iter().copied(), tag)
}

/// `Browser: {Chrome, Firefox}` (green) and `OS: {Windows, Mac}` (yellow).
#[allow(dead_code)]
pub fn browser_os_steps() -> Vec<Step> {
    vec![
        step("Browser", &["Chrome", "Firefox"], Tag::Green),
        step("OS", &["Windows", "Mac"], Tag::Yellow),
    ]
}

/// Three steps with two values each.
///
/// The greedy pass keeps 7 of the 8 assignments and covers all 12 pairs.
#[allow(dead_code)]
pub fn three_binary_steps() -> Vec<Step> {
    vec![
        step("A", &["a0", "a1"], Tag::Green),
        step("B", &["b0", "b1"], Tag::Yellow),
        step("C", &["c0", "c1"], Tag::Red),
    ]
}

/// `count` steps named `S0..` with `width` values each, named `v0..`.
#[allow(dead_code)]
pub fn uniform_steps(count: usize, width: usize) -> Vec<Step> {
    (0..count)
        .map(|i| {
            Step::new(format!("S{}", i))
                .with_values((0..width).map(|v| format!("v{}", v)), Tag::Green)
        })
        .collect()
}

/// Shorthand for reading a result's values in step order.
#[allow(dead_code)]
pub fn values_of(result: &PairwiseResult) -> Vec<&str> {
    result.values.values().map(String::as_str).collect()
}
