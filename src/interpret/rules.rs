// src/interpret/rules.rs
//
// Fixed threshold tables mapping acoustic metric values to qualitative
// labels. Buckets are ordered, lower-inclusive/upper-exclusive, with an
// open-ended top bucket, kept as data rather than branch logic.

use serde::{Deserialize, Serialize};

/// One classification bucket: applies to values strictly below `upper`.
pub struct Bucket {
    pub upper: f64,
    pub label: &'static str,
}

const fn bucket(upper: f64, label: &'static str) -> Bucket {
    Bucket { upper, label }
}

const PROMINENCE: [Bucket; 3] = [
    bucket(2.0, "Weak periodicity"),
    bucket(5.0, "Moderate periodicity"),
    bucket(f64::INFINITY, "Strong periodicity"),
];

const ENTROPY: [Bucket; 4] = [
    bucket(3.0, "Very structured"),
    bucket(6.0, "Moderate"),
    bucket(9.5, "Balanced"),
    bucket(f64::INFINITY, "High disorder"),
];

const FLATNESS: [Bucket; 3] = [
    bucket(0.2, "Energy concentrated"),
    bucket(0.4, "Moderate distribution"),
    bucket(f64::INFINITY, "Very uniform"),
];

const HARMONICITY_MEAN: [Bucket; 3] = [
    bucket(0.3, "Weak harmonics"),
    bucket(0.6, "Moderate harmonics"),
    bucket(f64::INFINITY, "Mostly voiced"),
];

const VOICED_RATIO: [Bucket; 3] = [
    bucket(0.3, "Mostly unvoiced"),
    bucket(0.7, "Mixed"),
    bucket(f64::INFINITY, "Mostly voiced"),
];

const PITCH_STD: [Bucket; 3] = [
    bucket(5.0, "Constant pitch"),
    bucket(30.0, "Moderate variation"),
    bucket(f64::INFINITY, "High variation"),
];

/// The closed set of acoustic metrics the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Autocorrelation peak prominence
    Prominence,
    /// Spectral entropy in bits
    Entropy,
    /// Spectral flatness (geometric / arithmetic mean ratio)
    Flatness,
    /// Mean harmonic-to-noise ratio, normalized
    HarmonicityMean,
    /// Fraction of frames classified voiced
    VoicedRatio,
    /// Pitch standard deviation in Hz
    PitchStd,
}

impl Metric {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Prominence,
            Self::Entropy,
            Self::Flatness,
            Self::HarmonicityMean,
            Self::VoicedRatio,
            Self::PitchStd,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "prominence" => Some(Self::Prominence),
            "entropy" => Some(Self::Entropy),
            "flatness" => Some(Self::Flatness),
            "harmonicity_mean" => Some(Self::HarmonicityMean),
            "voiced_ratio" => Some(Self::VoicedRatio),
            "pitch_std" => Some(Self::PitchStd),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Prominence => "prominence",
            Self::Entropy => "entropy",
            Self::Flatness => "flatness",
            Self::HarmonicityMean => "harmonicity_mean",
            Self::VoicedRatio => "voiced_ratio",
            Self::PitchStd => "pitch_std",
        }
    }

    fn buckets(&self) -> &'static [Bucket] {
        match self {
            Self::Prominence => &PROMINENCE,
            Self::Entropy => &ENTROPY,
            Self::Flatness => &FLATNESS,
            Self::HarmonicityMean => &HARMONICITY_MEAN,
            Self::VoicedRatio => &VOICED_RATIO,
            Self::PitchStd => &PITCH_STD,
        }
    }

    /// Classify a value into this metric's qualitative label.
    ///
    /// Bucket lower bounds are inclusive, upper bounds exclusive; the top
    /// bucket is open-ended, so every finite value lands in exactly one
    /// bucket. Non-finite values fall into the top bucket.
    pub fn interpret(&self, value: f64) -> &'static str {
        let buckets = self.buckets();
        for b in buckets {
            if value < b.upper {
                return b.label;
            }
        }
        buckets[buckets.len() - 1].label
    }
}
