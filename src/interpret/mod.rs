//! Rule-based interpretation of scalar acoustic metrics
//!
//! Maps already-computed metric values (prominence, entropy, flatness,
//! harmonicity, voiced ratio, pitch deviation) to qualitative labels through
//! fixed, deterministic threshold tables. No learning, no state.

mod rules;

pub use rules::Metric;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};

/// A single interpreted metric value.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub metric: &'static str,
    pub value: f64,
    pub label: &'static str,
}

/// Interpretations for a batch of observations, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretationReport {
    pub entries: Vec<Interpretation>,
}

/// Interpret a metric value by name.
///
/// Fails with `UnknownMetric` for names outside the closed set; for known
/// metrics every value maps to exactly one label.
pub fn interpret(metric_name: &str, value: f64) -> AnalysisResult<&'static str> {
    let metric = Metric::from_name(metric_name)
        .ok_or_else(|| AnalysisError::UnknownMetric(metric_name.to_string()))?;
    Ok(metric.interpret(value))
}

/// Interpret a batch of (name, value) observations.
///
/// The first unknown name aborts the whole batch; no partial reports.
pub fn interpret_all(observations: &[(String, f64)]) -> AnalysisResult<InterpretationReport> {
    let mut entries = Vec::with_capacity(observations.len());

    for (name, value) in observations {
        let metric = Metric::from_name(name)
            .ok_or_else(|| AnalysisError::UnknownMetric(name.clone()))?;
        entries.push(Interpretation {
            metric: metric.name(),
            value: *value,
            label: metric.interpret(*value),
        });
    }

    Ok(InterpretationReport { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_by_name() {
        assert_eq!(interpret("entropy", 3.0).unwrap(), "Moderate");
        assert_eq!(interpret("voiced_ratio", 0.9).unwrap(), "Mostly voiced");
    }

    #[test]
    fn test_interpret_unknown_metric() {
        let err = interpret("sparkle", 1.0).unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownMetric(_)));
    }

    #[test]
    fn test_interpret_all_preserves_order() {
        let obs = vec![
            ("pitch_std".to_string(), 4.0),
            ("flatness".to_string(), 0.2),
        ];
        let report = interpret_all(&obs).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].label, "Constant pitch");
        assert_eq!(report.entries[1].label, "Moderate distribution");
    }

    #[test]
    fn test_interpret_all_rejects_unknown() {
        let obs = vec![("brightness".to_string(), 1.0)];
        assert!(interpret_all(&obs).is_err());
    }
}
