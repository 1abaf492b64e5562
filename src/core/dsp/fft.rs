//! One-sided FFT for phase analysis

use num_complex::Complex;
use rustfft::FftPlanner;

/// Real-input forward FFT yielding the one-sided spectrum.
///
/// No windowing is applied: phase analysis operates on the raw frame, and a
/// window would alter the very phase relationships being measured.
pub struct RealFftProcessor {
    planner: FftPlanner<f64>,
}

impl RealFftProcessor {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Compute the ⌊N/2⌋+1 non-negative-frequency complex bins.
    pub fn one_sided_spectrum(&mut self, samples: &[f64]) -> Vec<Complex<f64>> {
        let n = samples.len();
        let fft = self.planner.plan_fft_forward(n);

        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .map(|&s| Complex::new(s, 0.0))
            .collect();

        fft.process(&mut buffer);

        buffer.truncate(n / 2 + 1);
        buffer
    }
}

impl Default for RealFftProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency axis for an N-sample one-sided spectrum: `freqs[k] = k * sr / N`.
pub fn bin_freqs(n: usize, sample_rate: u32) -> Vec<f64> {
    let step = sample_rate as f64 / n as f64;
    (0..n / 2 + 1).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_one_sided_length() {
        let mut fft = RealFftProcessor::new();
        assert_eq!(fft.one_sided_spectrum(&vec![0.0; 1024]).len(), 513);
        assert_eq!(fft.one_sided_spectrum(&vec![0.0; 1023]).len(), 512);
    }

    #[test]
    fn test_bin_freqs_axis() {
        let freqs = bin_freqs(1024, 16000);
        assert_eq!(freqs.len(), 513);
        assert_eq!(freqs[0], 0.0);
        assert!((freqs[1] - 15.625).abs() < 1e-12);
        assert!((freqs[512] - 8000.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_bin_sine_peak() {
        // 8 cycles over 64 samples lands exactly on bin 8
        let samples: Vec<f64> = (0..64)
            .map(|i| (2.0 * PI * 8.0 * i as f64 / 64.0).sin())
            .collect();

        let mut fft = RealFftProcessor::new();
        let spectrum = fft.one_sided_spectrum(&samples);

        let peak = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.norm().partial_cmp(&b.1.norm()).unwrap())
            .map(|(k, _)| k)
            .unwrap();
        assert_eq!(peak, 8);
        // forward FFT of A*sin at an exact bin: |X[k0]| = A*N/2
        assert!((spectrum[8].norm() - 32.0).abs() < 1e-9);
    }
}
