// tests/interpret_test.rs
//
// Bucket boundary behavior of the metric interpreter: lower bounds are
// inclusive, upper bounds exclusive, the top bucket is open-ended, and the
// mapping is total over every known metric.

use phaselens::{interpret, AnalysisError, Metric};

#[test]
fn prominence_boundaries() {
    assert_eq!(interpret("prominence", 1.9999).unwrap(), "Weak periodicity");
    assert_eq!(interpret("prominence", 2.0).unwrap(), "Moderate periodicity");
    assert_eq!(interpret("prominence", 4.9999).unwrap(), "Moderate periodicity");
    assert_eq!(interpret("prominence", 5.0).unwrap(), "Strong periodicity");
}

#[test]
fn entropy_boundaries() {
    assert_eq!(interpret("entropy", 2.9).unwrap(), "Very structured");
    assert_eq!(interpret("entropy", 3.0).unwrap(), "Moderate");
    assert_eq!(interpret("entropy", 6.0).unwrap(), "Balanced");
    assert_eq!(interpret("entropy", 9.4999).unwrap(), "Balanced");
    assert_eq!(interpret("entropy", 9.5).unwrap(), "High disorder");
}

#[test]
fn flatness_boundaries() {
    assert_eq!(interpret("flatness", 0.0).unwrap(), "Energy concentrated");
    assert_eq!(interpret("flatness", 0.2).unwrap(), "Moderate distribution");
    assert_eq!(interpret("flatness", 0.4).unwrap(), "Very uniform");
}

#[test]
fn harmonicity_boundaries() {
    assert_eq!(interpret("harmonicity_mean", 0.1).unwrap(), "Weak harmonics");
    assert_eq!(interpret("harmonicity_mean", 0.3).unwrap(), "Moderate harmonics");
    assert_eq!(interpret("harmonicity_mean", 0.6).unwrap(), "Mostly voiced");
}

#[test]
fn voiced_ratio_boundaries() {
    assert_eq!(interpret("voiced_ratio", 0.0).unwrap(), "Mostly unvoiced");
    assert_eq!(interpret("voiced_ratio", 0.3).unwrap(), "Mixed");
    assert_eq!(interpret("voiced_ratio", 0.6999).unwrap(), "Mixed");
    assert_eq!(interpret("voiced_ratio", 0.7).unwrap(), "Mostly voiced");
}

#[test]
fn pitch_std_boundaries() {
    assert_eq!(interpret("pitch_std", 0.0).unwrap(), "Constant pitch");
    assert_eq!(interpret("pitch_std", 5.0).unwrap(), "Moderate variation");
    assert_eq!(interpret("pitch_std", 29.9).unwrap(), "Moderate variation");
    assert_eq!(interpret("pitch_std", 30.0).unwrap(), "High variation");
}

#[test]
fn interpretation_is_deterministic() {
    let first = interpret("entropy", 3.0).unwrap();
    for _ in 0..100 {
        assert_eq!(interpret("entropy", 3.0).unwrap(), first);
    }
}

#[test]
fn every_known_metric_is_total() {
    let probes = [
        f64::NEG_INFINITY,
        -1e15,
        -1.0,
        0.0,
        1e-9,
        0.5,
        3.0,
        29.999,
        1e15,
        f64::INFINITY,
    ];

    for metric in Metric::all() {
        for &v in &probes {
            let label = metric.interpret(v);
            assert!(!label.is_empty(), "{:?} at {} gave empty label", metric, v);
        }
    }
}

#[test]
fn unknown_metric_is_a_hard_error() {
    match interpret("zcr", 0.5) {
        Err(AnalysisError::UnknownMetric(name)) => assert_eq!(name, "zcr"),
        other => panic!("expected UnknownMetric, got {:?}", other),
    }
}
