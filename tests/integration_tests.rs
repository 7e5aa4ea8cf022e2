#![expect(
    clippy::tests_outside_test_module,
    reason = "integration tests are only compiled in test mode"
)]

// End-to-end tests for the full loader -> matcher flow over on-disk CSV files

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use faq_match::FaqError;
use faq_match::corpus::Corpus;
use faq_match::matcher::{MatchOutcome, Matcher, NoMatchReason};

/// Write a corpus CSV into a temp dir and return its path
fn write_corpus(rows: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("can create temp dir");
    let path = temp_dir.path().join("qna.csv");
    fs::write(&path, rows).expect("can write corpus file");
    (temp_dir, path)
}

#[test]
fn load_build_and_query_roundtrip() {
    let (_temp_dir, path) = write_corpus(
        "Q,A\n\
         what is covid,a virus\n\
         covid vaccine types,several\n\
         how does quarantine work,stay home for ten days\n",
    );

    let corpus = Corpus::load(&path).expect("can load corpus");
    assert_eq!(corpus.len(), 3);

    let matcher = Matcher::build(corpus).expect("can build matcher");

    let outcome = matcher
        .find_match("what is covid-19", 0.3)
        .expect("valid threshold");
    match outcome {
        MatchOutcome::Match { index, answer, .. } => {
            assert_eq!(index, 0);
            assert_eq!(answer, "a virus");
        }
        MatchOutcome::NoMatch { .. } => panic!("expected a match"),
    }

    let outcome = matcher
        .find_match("unrelated topic about weather", 0.5)
        .expect("valid threshold");
    assert_eq!(
        outcome,
        MatchOutcome::NoMatch {
            reason: NoMatchReason::OffTopic,
        }
    );
}

#[test]
fn every_question_recovers_itself_from_disk() {
    let (_temp_dir, path) = write_corpus(
        "Q,A\n\
         what is covid,a virus\n\
         covid vaccine types,several\n\
         symptoms of the common cold,runny nose\n",
    );

    let matcher = Matcher::build(Corpus::load(&path).expect("can load corpus"))
        .expect("can build matcher");

    let questions: Vec<String> = matcher
        .corpus()
        .entries()
        .iter()
        .map(|e| e.question.clone())
        .collect();

    for (expected, question) in questions.iter().enumerate() {
        let outcome = matcher
            .find_match(question, 0.99)
            .expect("valid threshold");
        match outcome {
            MatchOutcome::Match { index, .. } => assert_eq!(index, expected),
            MatchOutcome::NoMatch { .. } => {
                panic!("question {question:?} did not recover itself")
            }
        }
    }
}

#[test]
fn answer_edits_on_disk_do_not_change_match_results() {
    let (_temp_dir, path_a) = write_corpus(
        "Q,A\n\
         what is covid,a virus\n\
         covid vaccine types,several\n",
    );
    let (_temp_dir_b, path_b) = write_corpus(
        "Q,A\n\
         what is covid,a famously unusual respiratory illness\n\
         covid vaccine types,mrna vector and inactivated\n",
    );

    let matcher_a = Matcher::build(Corpus::load(&path_a).expect("can load corpus"))
        .expect("can build matcher");
    let matcher_b = Matcher::build(Corpus::load(&path_b).expect("can load corpus"))
        .expect("can build matcher");

    for query in ["what is covid", "vaccine types", "respiratory illness"] {
        let a = matcher_a.find_match(query, 0.3).expect("valid threshold");
        let b = matcher_b.find_match(query, 0.3).expect("valid threshold");

        match (a, b) {
            (
                MatchOutcome::Match {
                    index: ia,
                    score: sa,
                    ..
                },
                MatchOutcome::Match {
                    index: ib,
                    score: sb,
                    ..
                },
            ) => {
                assert_eq!(ia, ib);
                assert!((sa - sb).abs() < 1e-6);
            }
            (MatchOutcome::NoMatch { .. }, MatchOutcome::NoMatch { .. }) => {}
            (a, b) => panic!("outcomes diverged for {query:?}: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn corpus_with_headers_only_fails_at_build() {
    let (_temp_dir, path) = write_corpus("Q,A\n");

    let corpus = Corpus::load(&path).expect("can load empty corpus");
    let result = Matcher::build(corpus);

    assert!(matches!(result, Err(FaqError::IndexBuild(_))));
}

#[test]
fn corpus_missing_columns_fails_at_load() {
    let (_temp_dir, path) = write_corpus("Question,Answer\nwhat is covid,a virus\n");

    assert!(matches!(Corpus::load(&path), Err(FaqError::Load(_))));
}

#[test]
fn threshold_contract_is_enforced_end_to_end() {
    let (_temp_dir, path) = write_corpus("Q,A\nwhat is covid,a virus\n");
    let matcher = Matcher::build(Corpus::load(&path).expect("can load corpus"))
        .expect("can build matcher");

    assert!(matches!(
        matcher.find_match("x", 1.5),
        Err(FaqError::InvalidThreshold(_))
    ));

    // Exact threshold 1.0 with a verbatim query is still accepted: the score
    // for a self-match is 1.0 and the comparison is inclusive
    let outcome = matcher
        .find_match("what is covid", 0.0)
        .expect("valid threshold");
    assert!(matches!(outcome, MatchOutcome::Match { index: 0, .. }));
}

#[test]
fn empty_query_is_no_match_end_to_end() {
    let (_temp_dir, path) = write_corpus("Q,A\nwhat is covid,a virus\n");
    let matcher = Matcher::build(Corpus::load(&path).expect("can load corpus"))
        .expect("can build matcher");

    assert_eq!(
        matcher.find_match("", 0.1).expect("valid threshold"),
        MatchOutcome::NoMatch {
            reason: NoMatchReason::OffTopic,
        }
    );
}
