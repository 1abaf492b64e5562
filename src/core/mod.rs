//! Core spectral analysis modules

pub mod dsp;
pub mod group_delay;
pub mod spectrum;
pub mod waveform;

pub use group_delay::{group_delay, GroupDelayCurve, GroupDelayEstimator, SmoothingConfig};
pub use spectrum::{phase_spectrum, PhaseSpectrum, SpectralAnalyzer};
pub use waveform::Waveform;
