//! Phase-spectrum extraction with unwrapping and magnitude masking

use std::f64::consts::PI;

use log::debug;

use super::dsp::{bin_freqs, RealFftProcessor};
use super::waveform::Waveform;
use crate::error::{AnalysisError, AnalysisResult};

/// One-sided spectrum of a waveform: parallel, index-aligned arrays.
///
/// `phase` is in radians, wrapped into (-pi, pi] or unwrapped to a continuous
/// curve depending on how it was produced. Bins masked below the magnitude
/// threshold carry `f64::NAN` in `phase`; the arrays never shrink, so
/// consumers can zip by index.
#[derive(Debug, Clone)]
pub struct PhaseSpectrum {
    pub freqs: Vec<f64>,
    pub phase: Vec<f64>,
    pub magnitude: Vec<f64>,
}

/// Phase-spectrum analyzer.
///
/// Holds the FFT planner so repeated analyses of same-length frames reuse
/// the plan. Stateless otherwise; every call is independent.
pub struct SpectralAnalyzer {
    fft: RealFftProcessor,
}

impl SpectralAnalyzer {
    pub fn new() -> Self {
        Self {
            fft: RealFftProcessor::new(),
        }
    }

    /// Compute the phase spectrum of a waveform.
    ///
    /// With `unwrap` set, 2pi discontinuities are removed so the phase is a
    /// continuous curve. With `mask_threshold` set, phase at bins whose
    /// magnitude falls below the threshold is replaced by NaN; masking runs
    /// after unwrapping and never interrupts the unwrap accumulation.
    pub fn analyze(
        &mut self,
        waveform: &Waveform,
        unwrap: bool,
        mask_threshold: Option<f64>,
    ) -> AnalysisResult<PhaseSpectrum> {
        if waveform.is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "waveform is empty".to_string(),
            ));
        }
        if let Some(threshold) = mask_threshold {
            if threshold < 0.0 {
                return Err(AnalysisError::InvalidArgument(format!(
                    "mask threshold must be non-negative, got {}",
                    threshold
                )));
            }
        }

        let n = waveform.len();
        let spectrum = self.fft.one_sided_spectrum(waveform.samples());
        let freqs = bin_freqs(n, waveform.sample_rate());

        let magnitude: Vec<f64> = spectrum.iter().map(|c| c.norm()).collect();
        let mut phase: Vec<f64> = spectrum.iter().map(|c| c.arg()).collect();

        if unwrap {
            phase = unwrap_phase(&phase);
        }

        if let Some(threshold) = mask_threshold {
            let mut masked = 0usize;
            for (p, &m) in phase.iter_mut().zip(magnitude.iter()) {
                if m < threshold {
                    *p = f64::NAN;
                    masked += 1;
                }
            }
            debug!(
                "masked {} of {} bins below magnitude {}",
                masked,
                freqs.len(),
                threshold
            );
        }

        Ok(PhaseSpectrum {
            freqs,
            phase,
            magnitude,
        })
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot phase spectrum computation.
pub fn phase_spectrum(
    waveform: &Waveform,
    unwrap: bool,
    mask_threshold: Option<f64>,
) -> AnalysisResult<PhaseSpectrum> {
    SpectralAnalyzer::new().analyze(waveform, unwrap, mask_threshold)
}

/// Remove 2pi discontinuities from a wrapped phase sequence.
///
/// Sequential fold over the bins: whenever the jump between neighbors exceeds
/// pi in absolute value, shift by the smallest multiple of 2pi that brings it
/// back into (-pi, pi], and carry that correction through the rest of the
/// sequence. Subtracting the input from the output always leaves exact
/// multiples of 2pi, so re-wrapping reproduces the input.
pub fn unwrap_phase(wrapped: &[f64]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(wrapped.len());
    let mut correction = 0.0f64;

    for (i, &p) in wrapped.iter().enumerate() {
        if i > 0 {
            let jump = p - wrapped[i - 1];
            if jump > PI {
                correction -= 2.0 * PI * ((jump - PI) / (2.0 * PI)).ceil();
            } else if jump < -PI {
                correction += 2.0 * PI * ((-jump - PI) / (2.0 * PI)).ceil();
            }
        }
        unwrapped.push(p + correction);
    }

    unwrapped
}
