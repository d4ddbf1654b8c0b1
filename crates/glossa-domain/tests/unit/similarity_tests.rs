//! Unit tests for similarity value objects

use glossa_domain::{
    Error, MethodResult, ScoreOutcome, ScoreReport, SimilarityMethod, SimilarityScore, TextPair,
};

#[test]
fn test_score_is_clamped() {
    assert_eq!(SimilarityScore::clamped(1.000_000_1).value(), 1.0);
    assert_eq!(SimilarityScore::clamped(-0.2).value(), 0.0);
    assert_eq!(SimilarityScore::clamped(f64::NAN).value(), 0.0);
    assert_eq!(SimilarityScore::clamped(0.42).value(), 0.42);
}

#[test]
fn test_deserialized_score_is_clamped() {
    let high: SimilarityScore = serde_json::from_str("1.7").unwrap();
    let low: SimilarityScore = serde_json::from_str("-0.3").unwrap();
    let inside: SimilarityScore = serde_json::from_str("0.25").unwrap();

    assert_eq!(high, SimilarityScore::MAX);
    assert_eq!(low, SimilarityScore::MIN);
    assert_eq!(inside.value(), 0.25);
    assert_eq!(serde_json::to_string(&inside).unwrap(), "0.25");
}

#[test]
fn test_method_parsing() {
    assert_eq!(
        "lexical".parse::<SimilarityMethod>().unwrap(),
        SimilarityMethod::Lexical
    );
    assert_eq!(
        "vector_space".parse::<SimilarityMethod>().unwrap(),
        SimilarityMethod::VectorSpace
    );
    assert_eq!(
        "Semantic".parse::<SimilarityMethod>().unwrap(),
        SimilarityMethod::Semantic
    );
    assert!(matches!(
        "edit-distance".parse::<SimilarityMethod>(),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_method_display_round_trips() {
    for method in SimilarityMethod::ALL {
        assert_eq!(method.to_string().parse::<SimilarityMethod>().unwrap(), method);
    }
}

#[test]
fn test_method_serializes_kebab_case() {
    let json = serde_json::to_string(&SimilarityMethod::VectorSpace).unwrap();
    assert_eq!(json, "\"vector-space\"");
}

#[test]
fn test_text_pair_swapped() {
    let pair = TextPair::new("left", "right");
    let swapped = pair.swapped();
    assert_eq!(swapped.source(), "right");
    assert_eq!(swapped.target(), "left");
    assert!(!pair.is_empty());
    assert!(TextPair::from(("", "")).is_empty());
}

#[test]
fn test_report_overall_is_mean_of_every_method() {
    let mut report = ScoreReport::default();
    for (method, value) in [
        (SimilarityMethod::Lexical, 0.5),
        (SimilarityMethod::VectorSpace, 0.6),
        (SimilarityMethod::Semantic, 0.9),
    ] {
        report.record(ScoreOutcome::new(method, SimilarityScore::clamped(value)));
    }

    let overall = report.overall().unwrap().value();
    assert!((overall - 2.0 / 3.0).abs() < 1e-12);
    assert!(!report.has_failures());
}

#[test]
fn test_report_with_failure_has_no_overall() {
    let mut report = ScoreReport::default();
    report.record(ScoreOutcome::new(
        SimilarityMethod::Lexical,
        SimilarityScore::clamped(0.5),
    ));
    report.record(ScoreOutcome::new(
        SimilarityMethod::Semantic,
        SimilarityScore::clamped(0.9),
    ));
    report.record_failure(
        SimilarityMethod::VectorSpace,
        &Error::empty_vocabulary("no terms"),
    );

    // 0.5 and 0.9 alone would average 0.7 over a smaller set of methods
    assert!(report.overall().is_none());
    assert!(report.has_failures());
    assert_eq!(report.score(SimilarityMethod::VectorSpace), None);
    assert!(matches!(
        report.results.get(&SimilarityMethod::VectorSpace),
        Some(MethodResult::Failed { .. })
    ));
}

#[test]
fn test_report_without_scores_has_no_overall() {
    let mut report = ScoreReport::default();
    report.record_failure(SimilarityMethod::Lexical, &Error::embedding("boom"));
    assert!(report.overall().is_none());
}

#[test]
fn test_report_json_shape() {
    let mut report = ScoreReport::default();
    report.record(
        ScoreOutcome::new(SimilarityMethod::Semantic, SimilarityScore::MAX).with_truncation(true),
    );
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["results"]["semantic"]["status"], "scored");
    assert_eq!(json["results"]["semantic"]["score"], 1.0);
    assert_eq!(json["results"]["semantic"]["truncated"], true);
}
