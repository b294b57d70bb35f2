//! Integration tests for Kumiawase
//!
//! End-to-end tests covering the generator pipeline and session snapshots.
//!
mod common;
use common::*;
use kumiawase::prelude::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_generate_browser_os_matrix() {
        let generation = Generator::new(browser_os_steps()).generate().unwrap();

        assert_eq!(generation.domains.len(), 2);
        assert_eq!(generation.results.len(), 4);
        assert_eq!(generation.report.covered_pairs(), 4);
        assert_eq!(
            generation.results[1].description,
            "Browser: Chrome | OS: Mac"
        );
    }

    #[test]
    fn test_generate_rejects_empty_steps() {
        let err = Generator::new(vec![]).generate().unwrap_err();
        assert_eq!(err, GenerationError::NoSteps);
    }

    #[test]
    fn test_generate_with_only_empty_step() {
        let generation = Generator::new(vec![Step::new("Login")]).generate().unwrap();

        assert_eq!(generation.results.len(), 1);
        let result = &generation.results[0];
        assert_eq!(result.value("Login"), Some("Login"));
        assert_eq!(result.tag("Login"), Some(Tag::Yellow));
        assert_eq!(result.description, "Login");
    }

    #[test]
    fn test_assignment_limit() {
        let steps = uniform_steps(3, 10);

        let err = Generator::builder(steps.clone())
            .with_assignment_limit(999)
            .build()
            .generate()
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::TooManyAssignments {
                count: 1000,
                limit: 999
            }
        );

        let generation = Generator::builder(steps)
            .with_assignment_limit(1000)
            .build()
            .generate()
            .unwrap();
        assert_eq!(generation.report.total_assignments, 1000);
        assert_eq!(generation.results.len(), 50);
    }

    #[test]
    fn test_generator_cap_setting() {
        let generation = Generator::builder(three_binary_steps())
            .with_cap(4)
            .build()
            .generate()
            .unwrap();

        assert_eq!(generation.results.len(), 4);
        assert!(generation.report.cap_reached);
        assert!(generation.report.is_incomplete());
    }

    #[test]
    fn test_generation_is_repeatable() {
        let generator = Generator::new(uniform_steps(4, 4));
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();

        assert_eq!(first.results, second.results);
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn test_session_revisions() {
        let session = Session::new(browser_os_steps());
        assert_eq!(session.revision(), 0);
        assert!(session.results().is_empty());

        let generated = session.regenerate().unwrap();
        assert_eq!(generated.revision(), 1);
        assert_eq!(generated.results().len(), 4);
        assert_eq!(generated.steps(), session.steps());
        // The earlier snapshot is untouched.
        assert!(session.results().is_empty());

        let edited = generated.with_steps(three_binary_steps());
        assert_eq!(edited.revision(), 2);
        assert!(edited.results().is_empty());

        let regenerated = edited.regenerate_with(|b| b.with_cap(2)).unwrap();
        assert_eq!(regenerated.revision(), 3);
        assert_eq!(regenerated.results().len(), 2);
    }

    #[test]
    fn test_session_regenerate_replaces_results() {
        let session = Session::new(three_binary_steps())
            .regenerate_with(|b| b.with_cap(3))
            .unwrap();
        assert_eq!(session.results().len(), 3);

        let session = session.regenerate().unwrap();
        assert_eq!(session.results().len(), 7);
    }

    #[test]
    fn test_session_without_steps_cannot_generate() {
        let err = Session::new(vec![]).regenerate().unwrap_err();
        assert_eq!(err, GenerationError::NoSteps);
    }

    #[test]
    fn test_session_document_round_trip() {
        let session = Session::new(browser_os_steps()).regenerate().unwrap();
        let json = session.to_document().to_json_pretty().unwrap();

        let restored = Session::from_document(PairwiseDocument::from_json(&json).unwrap());
        assert_eq!(restored.steps(), session.steps());
        assert_eq!(restored.results(), session.results());
    }

    #[test]
    fn test_document_steps_feed_generator() {
        let document = PairwiseDocument::new(three_binary_steps(), vec![]);
        let steps = document.into_steps().unwrap();

        let generation = Generator::new(steps).generate().unwrap();
        assert_eq!(generation.results.len(), 7);
    }
}
