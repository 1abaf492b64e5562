//! Digital Signal Processing primitives

pub mod fft;
pub mod filters;

pub use fft::{bin_freqs, RealFftProcessor};
pub use filters::{gradient, savgol_filter};
