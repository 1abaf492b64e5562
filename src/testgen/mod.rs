// src/testgen/mod.rs
//
// Synthetic reference signals for exercising the phase analysis chain.
// Generated in memory; no codec or file round trip involved.

use std::f64::consts::PI;

use log::debug;

use crate::core::waveform::Waveform;
use crate::error::{AnalysisError, AnalysisResult};

/// Default sample rate for generated reference signals, Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Default peak amplitude for generated tones
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Generate a pure sine tone: y(t) = amplitude * sin(2*pi*freq*t).
///
/// Samples `round(sample_rate * duration)` points over the half-open
/// interval [0, duration): the first sample sits at t = 0 and no sample
/// lands on t = duration. Frequencies at or above sample_rate / 2 alias
/// rather than fail.
pub fn generate_tone(
    freq: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
) -> AnalysisResult<Waveform> {
    if !(duration > 0.0) {
        return Err(AnalysisError::InvalidArgument(format!(
            "tone duration must be positive, got {}",
            duration
        )));
    }
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidArgument(
            "sample rate must be positive".to_string(),
        ));
    }

    let n = (sample_rate as f64 * duration).round() as usize;
    let step = duration / n as f64;

    debug!("generating {} Hz tone, {} samples at {} Hz", freq, n, sample_rate);

    let samples = (0..n)
        .map(|i| amplitude * (2.0 * PI * freq * i as f64 * step).sin())
        .collect();

    Ok(Waveform::new(samples, sample_rate))
}

/// Generate a unit impulse delayed by `delay_samples`.
///
/// Its spectrum has unit magnitude and exactly linear phase, so the
/// theoretical group delay is `delay_samples / sample_rate` at every bin.
/// Used as ground truth for the group delay estimator.
pub fn delayed_impulse(
    delay_samples: usize,
    total_samples: usize,
    sample_rate: u32,
) -> AnalysisResult<Waveform> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidArgument(
            "sample rate must be positive".to_string(),
        ));
    }
    if total_samples == 0 {
        return Err(AnalysisError::InvalidArgument(
            "impulse length must be positive".to_string(),
        ));
    }
    if delay_samples >= total_samples {
        return Err(AnalysisError::InvalidArgument(format!(
            "impulse delay {} must fall within the {} sample frame",
            delay_samples, total_samples
        )));
    }

    let mut samples = vec![0.0f64; total_samples];
    samples[delay_samples] = 1.0;

    Ok(Waveform::new(samples, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_sample_count() {
        let w = generate_tone(150.0, 1.0, 16000, 0.5).unwrap();
        assert_eq!(w.len(), 16000);

        let w = generate_tone(440.0, 0.25, 44100, 0.5).unwrap();
        assert_eq!(w.len(), 11025);
    }

    #[test]
    fn test_tone_starts_at_zero() {
        let w = generate_tone(150.0, 0.1, 16000, 0.5).unwrap();
        assert_eq!(w.samples()[0], 0.0);
    }

    #[test]
    fn test_tone_rms() {
        // 150 whole cycles in one second: RMS is exactly amplitude / sqrt(2)
        let w = generate_tone(150.0, 1.0, 16000, 0.5).unwrap();
        assert!((w.rms() - 0.5 / 2.0f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_tone_peak_amplitude_bounded() {
        let w = generate_tone(997.0, 0.5, 16000, 0.25).unwrap();
        for &s in w.samples() {
            assert!(s.abs() <= 0.25 + 1e-12);
        }
    }

    #[test]
    fn test_tone_rejects_bad_duration() {
        assert!(generate_tone(150.0, 0.0, 16000, 0.5).is_err());
        assert!(generate_tone(150.0, -1.0, 16000, 0.5).is_err());
        assert!(generate_tone(150.0, f64::NAN, 16000, 0.5).is_err());
    }

    #[test]
    fn test_tone_rejects_zero_sample_rate() {
        assert!(generate_tone(150.0, 1.0, 0, 0.5).is_err());
    }

    #[test]
    fn test_impulse_placement() {
        let w = delayed_impulse(10, 64, 16000).unwrap();
        assert_eq!(w.len(), 64);
        for (i, &s) in w.samples().iter().enumerate() {
            assert_eq!(s, if i == 10 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn test_impulse_rejects_delay_past_end() {
        assert!(delayed_impulse(64, 64, 16000).is_err());
    }
}
