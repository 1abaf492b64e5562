//! Group delay estimation from the unwrapped phase spectrum

use std::f64::consts::PI;

use log::debug;

use super::dsp::{bin_freqs, gradient, savgol_filter, RealFftProcessor};
use super::spectrum::unwrap_phase;
use super::waveform::Waveform;
use crate::error::{AnalysisError, AnalysisResult};

/// Group delay per frequency bin, in seconds.
///
/// Same frequency axis as the phase spectrum it was derived from; the
/// derivative is taken pointwise, so `delay` has one entry per bin with no
/// shrinkage at the boundaries.
#[derive(Debug, Clone)]
pub struct GroupDelayCurve {
    pub freqs: Vec<f64>,
    pub delay: Vec<f64>,
}

/// Phase-smoothing parameters for group delay estimation.
///
/// Raw phase differentiation amplifies bin-to-bin noise; the Savitzky-Golay
/// pre-smoothing trades a small bias for a large variance reduction.
#[derive(Debug, Clone)]
pub struct SmoothingConfig {
    pub smooth_phase: bool,
    /// Filter window length in bins, must be odd
    pub window_length: usize,
    /// Fit polynomial order, must be less than `window_length`
    pub polyorder: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            smooth_phase: true,
            window_length: 101,
            polyorder: 3,
        }
    }
}

/// Group delay estimator.
///
/// Recomputes the one-sided spectrum itself with unwrapping forced on and no
/// magnitude masking: the derivative needs the full continuous phase curve.
pub struct GroupDelayEstimator {
    fft: RealFftProcessor,
}

impl GroupDelayEstimator {
    pub fn new() -> Self {
        Self {
            fft: RealFftProcessor::new(),
        }
    }

    /// Estimate group delay: tau(f) = -(dphi/df) / 2pi.
    ///
    /// Positive delay means energy at that frequency arrives late relative
    /// to the reference.
    pub fn estimate(
        &mut self,
        waveform: &Waveform,
        config: &SmoothingConfig,
    ) -> AnalysisResult<GroupDelayCurve> {
        if waveform.is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "waveform is empty".to_string(),
            ));
        }

        let n = waveform.len();
        let bins = n / 2 + 1;
        if bins < 2 {
            return Err(AnalysisError::InvalidArgument(format!(
                "waveform of {} sample(s) yields {} spectrum bin(s); at least 2 needed to differentiate",
                n, bins
            )));
        }

        let spectrum = self.fft.one_sided_spectrum(waveform.samples());
        let freqs = bin_freqs(n, waveform.sample_rate());

        let wrapped: Vec<f64> = spectrum.iter().map(|c| c.arg()).collect();
        let mut phase = unwrap_phase(&wrapped);

        if config.smooth_phase {
            debug!(
                "smoothing phase over {} bins, window {}, polyorder {}",
                bins, config.window_length, config.polyorder
            );
            phase = savgol_filter(&phase, config.window_length, config.polyorder)?;
        }

        let dphi_df = gradient(&phase, &freqs);
        let delay: Vec<f64> = dphi_df.iter().map(|&d| -d / (2.0 * PI)).collect();

        Ok(GroupDelayCurve { freqs, delay })
    }
}

impl Default for GroupDelayEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot group delay estimation with the given smoothing settings.
pub fn group_delay(
    waveform: &Waveform,
    config: &SmoothingConfig,
) -> AnalysisResult<GroupDelayCurve> {
    GroupDelayEstimator::new().estimate(waveform, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen::delayed_impulse;

    fn no_smoothing() -> SmoothingConfig {
        SmoothingConfig {
            smooth_phase: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_rejects_empty() {
        let w = Waveform::new(vec![], 16000);
        assert!(group_delay(&w, &no_smoothing()).is_err());
    }

    #[test]
    fn test_rejects_single_sample() {
        let w = Waveform::new(vec![1.0], 16000);
        assert!(group_delay(&w, &no_smoothing()).is_err());
    }

    #[test]
    fn test_rejects_window_longer_than_bins() {
        // 64 samples -> 33 bins, window of 101 cannot fit
        let w = Waveform::new(vec![0.25; 64], 16000);
        assert!(group_delay(&w, &SmoothingConfig::default()).is_err());
    }

    #[test]
    fn test_output_length_matches_bins() {
        let w = delayed_impulse(10, 512, 16000).unwrap();
        let curve = group_delay(&w, &no_smoothing()).unwrap();
        assert_eq!(curve.freqs.len(), 257);
        assert_eq!(curve.delay.len(), 257);
    }

    #[test]
    fn test_delayed_impulse_constant_delay() {
        // x[n] = delta[n - d] has linear phase, so tau(f) = d / sr everywhere
        let sr = 16000u32;
        let d = 25usize;
        let w = delayed_impulse(d, 1024, sr).unwrap();
        let expected = d as f64 / sr as f64;

        let curve = group_delay(&w, &no_smoothing()).unwrap();
        for &tau in &curve.delay {
            assert!((tau - expected).abs() < 1e-9, "tau = {}", tau);
        }
    }

    #[test]
    fn test_smoothing_preserves_linear_phase() {
        // A polyorder >= 1 fit reproduces a linear phase ramp exactly
        let sr = 16000u32;
        let d = 40usize;
        let w = delayed_impulse(d, 2048, sr).unwrap();
        let expected = d as f64 / sr as f64;

        let curve = group_delay(&w, &SmoothingConfig::default()).unwrap();
        for &tau in &curve.delay {
            assert!((tau - expected).abs() < 1e-9, "tau = {}", tau);
        }
    }
}
