// src/cli/mod.rs
//
// Presentation layer for the phaselens binary: report assembly plus
// terminal and JSON rendering. The analysis core never prints.

mod output;

pub use output::{format_interpretation_report, format_tone_report};

use serde::Serialize;

use crate::core::{GroupDelayCurve, PhaseSpectrum};

/// Summary of a reference-tone analysis run, shaped for display.
#[derive(Debug, Clone, Serialize)]
pub struct ToneReport {
    pub freq_hz: f64,
    pub duration_secs: f64,
    pub sample_rate_hz: u32,
    pub samples: usize,
    pub bins: usize,
    pub freq_resolution_hz: f64,
    pub peak_freq_hz: f64,
    pub peak_magnitude: f64,
    pub masked_bins: usize,
    pub mean_group_delay_us: f64,
    pub max_abs_group_delay_us: f64,
}

impl ToneReport {
    pub fn build(
        freq_hz: f64,
        sample_rate_hz: u32,
        samples: usize,
        spectrum: &PhaseSpectrum,
        delay: &GroupDelayCurve,
    ) -> Self {
        let (peak_bin, peak_magnitude) = spectrum
            .magnitude
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::MIN), |best, (k, m)| {
                if m > best.1 {
                    (k, m)
                } else {
                    best
                }
            });

        let masked_bins = spectrum.phase.iter().filter(|p| p.is_nan()).count();

        let mean_delay =
            delay.delay.iter().sum::<f64>() / delay.delay.len() as f64;
        let max_abs_delay = delay
            .delay
            .iter()
            .fold(0.0f64, |acc, &d| acc.max(d.abs()));

        Self {
            freq_hz,
            duration_secs: samples as f64 / sample_rate_hz as f64,
            sample_rate_hz,
            samples,
            bins: spectrum.freqs.len(),
            freq_resolution_hz: sample_rate_hz as f64 / samples as f64,
            peak_freq_hz: spectrum.freqs[peak_bin],
            peak_magnitude,
            masked_bins,
            mean_group_delay_us: mean_delay * 1e6,
            max_abs_group_delay_us: max_abs_delay * 1e6,
        }
    }
}
