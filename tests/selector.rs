//! Tests for cross-product enumeration and greedy pair selection.
mod common;
use common::*;
use kumiawase::prelude::*;
use kumiawase::selector::{
    CrossProduct, DEFAULT_CAP, enumerate_assignments, pair_key, pair_keys, possible_pair_count,
};

#[test]
fn test_cross_product_runs_in_odometer_order() {
    let domains = build_domains(&[
        step("N", &["1", "2"], Tag::Green),
        step("L", &["x", "y", "z"], Tag::Green),
    ]);

    let indices: Vec<Vec<usize>> = CrossProduct::new(&domains).collect();
    assert_eq!(
        indices,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 1],
            vec![1, 2],
        ]
    );

    let descriptions: Vec<String> = enumerate_assignments(&domains)
        .into_iter()
        .map(|a| a.descriptions.join(" | "))
        .collect();
    assert_eq!(descriptions[0], "N: 1 | L: x");
    assert_eq!(descriptions[2], "N: 1 | L: z");
    assert_eq!(descriptions[3], "N: 2 | L: x");
}

#[test]
fn test_cross_product_cardinality_is_product_of_sizes() {
    let domains = build_domains(&[
        step("A", &["1", "2"], Tag::Green),
        step("B", &["1", "2", "3"], Tag::Green),
        step("C", &["1", "2", "3", "4"], Tag::Green),
        step("D", &[], Tag::Green),
    ]);

    assert_eq!(CrossProduct::cardinality(&domains), 24);
    assert_eq!(CrossProduct::new(&domains).count(), 24);
    assert_eq!(enumerate_assignments(&domains).len(), 24);
}

#[test]
fn test_cross_product_of_nothing_is_empty() {
    assert_eq!(CrossProduct::cardinality(&[]), 0);
    assert_eq!(CrossProduct::new(&[]).count(), 0);
}

#[test]
fn test_pair_keys_follow_step_order() {
    let domains = build_domains(&[
        step("Zeta", &["z"], Tag::Green),
        step("Alpha", &["a"], Tag::Green),
        step("Mid", &["m"], Tag::Green),
    ]);

    let keys = pair_keys(&domains, &[0, 0, 0]);
    assert_eq!(keys, vec!["Zeta:z-Alpha:a", "Zeta:z-Mid:m", "Alpha:a-Mid:m"]);
    assert_eq!(pair_key("OS", "Mac", "Browser", "Chrome"), "OS:Mac-Browser:Chrome");
}

#[test]
fn test_two_steps_select_entire_cross_product() {
    let domains = build_domains(&browser_os_steps());
    let (results, report) = PairwiseSelector::new().select_with_report(&domains);

    let rows: Vec<Vec<&str>> = results.iter().map(values_of).collect();
    assert_eq!(
        rows,
        vec![
            vec!["Chrome", "Windows"],
            vec!["Chrome", "Mac"],
            vec!["Firefox", "Windows"],
            vec!["Firefox", "Mac"],
        ]
    );
    assert_eq!(report.total_assignments, 4);
    assert_eq!(report.possible_pairs, 4);
    assert_eq!(report.covered_pairs(), 4);
    assert!(!report.cap_reached);
    assert!(!report.is_incomplete());
}

#[test]
fn test_results_carry_description_and_tags() {
    let results = select_pairwise(&build_domains(&browser_os_steps()));
    let first = &results[0];

    assert_eq!(first.description, "Browser: Chrome | OS: Windows");
    assert_eq!(first.value("Browser"), Some("Chrome"));
    assert_eq!(first.tag("Browser"), Some(Tag::Green));
    assert_eq!(first.tag("OS"), Some(Tag::Yellow));
    assert_eq!(first.value("Missing"), None);
}

#[test]
fn test_single_step_keeps_only_first_assignment() {
    // No pairs exist, so only the free first assignment is accepted.
    let domains = build_domains(&[step("Only", &["A", "B", "C"], Tag::Green)]);
    let (results, report) = PairwiseSelector::new().select_with_report(&domains);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value("Only"), Some("A"));
    assert_eq!(results[0].description, "Only: A");
    assert_eq!(report.total_assignments, 3);
    assert_eq!(report.assignments_examined, 3);
    assert_eq!(report.possible_pairs, 0);
    assert_eq!(report.coverage_ratio(), 1.0);
}

#[test]
fn test_synthetic_step_pairs_with_real_values() {
    let domains = build_domains(&[step("Browser", &["Chrome", "Firefox", "Edge"], Tag::Green), Step::new("Login")]);
    let results = select_pairwise(&domains);

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.value("Login") == Some("Login")));
    assert!(results.iter().all(|r| r.tag("Login") == Some(Tag::Yellow)));
    assert_eq!(results[2].description, "Browser: Edge | Login");
}

#[test]
fn test_three_steps_skip_fully_covered_assignment() {
    let domains = build_domains(&three_binary_steps());
    let (results, report) = PairwiseSelector::new().select_with_report(&domains);

    assert_eq!(results.len(), 7);
    assert_eq!(report.possible_pairs, 12);
    assert_eq!(report.coverage_progress, vec![3, 5, 7, 8, 10, 11, 12]);
    // The last assignment only repeats pairs that are already covered.
    assert!(
        !results
            .iter()
            .any(|r| values_of(r) == vec!["a1", "b1", "c1"])
    );
}

#[test]
fn test_coverage_never_shrinks() {
    let domains = build_domains(&uniform_steps(4, 3));
    let (results, report) = PairwiseSelector::new().select_with_report(&domains);

    assert_eq!(report.coverage_progress.len(), results.len());
    assert!(report.coverage_progress.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(report.covered_pairs(), report.possible_pairs);
}

#[test]
fn test_cap_limits_output() {
    let domains = build_domains(&uniform_steps(2, 10));
    let (results, report) = PairwiseSelector::new().select_with_report(&domains);

    assert_eq!(report.total_assignments, 100);
    assert_eq!(results.len(), DEFAULT_CAP);
    assert!(report.cap_reached);
    assert!(report.is_incomplete());
    assert_eq!(report.covered_pairs(), 50);
    assert_eq!(report.assignments_examined, 50);
}

#[test]
fn test_custom_cap_and_zero_cap() {
    let domains = build_domains(&browser_os_steps());

    assert_eq!(PairwiseSelector::new().with_cap(3).select(&domains).len(), 3);

    let selector = PairwiseSelector::new().with_cap(0);
    assert_eq!(selector.cap(), 1);
    assert_eq!(selector.select(&domains).len(), 1);
}

#[test]
fn test_output_never_exceeds_cap_or_total() {
    for (count, width) in [(1, 1), (2, 2), (3, 3), (4, 4), (5, 2)] {
        let domains = build_domains(&uniform_steps(count, width));
        let total = CrossProduct::cardinality(&domains);
        let results = select_pairwise(&domains);

        assert!(!results.is_empty());
        assert!(results.len() as u128 <= total.min(DEFAULT_CAP as u128));
    }
}

#[test]
fn test_selection_is_deterministic() {
    let domains = build_domains(&uniform_steps(5, 3));
    let first = select_pairwise(&domains);
    let second = select_pairwise(&domains);
    assert_eq!(first, second);
}

#[test]
fn test_repeated_step_name_keeps_last_value() {
    let domains = build_domains(&[
        step("Env", &["a", "b"], Tag::Green),
        step("Env", &["c"], Tag::Red),
    ]);
    let results = select_pairwise(&domains);

    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.values.len(), 1);
        assert_eq!(result.value("Env"), Some("c"));
        assert_eq!(result.tag("Env"), Some(Tag::Red));
    }
    assert_eq!(results[0].description, "Env: a | Env: c");
    assert_eq!(possible_pair_count(&domains), 2);
}

#[test]
fn test_no_domains_select_nothing() {
    let (results, report) = PairwiseSelector::new().select_with_report(&[]);
    assert!(results.is_empty());
    assert_eq!(report.total_assignments, 0);
    assert_eq!(report.assignments_examined, 0);
}
