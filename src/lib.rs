//! PhaseLens - Spectral phase analysis for exploratory audio work
//!
//! Inspects the phase behavior of an audio waveform and turns scalar
//! acoustic metrics into plain-language descriptions. Built for the kind of
//! workflow where an engineer wants to ask "does this recording carry phase
//! distortion or timing artifacts, and how voiced is it?" without standing
//! up a full pipeline.
//!
//! ## Features
//!
//! - **Phase spectrum**: one-sided FFT phase with cumulative 2pi unwrapping
//!   and magnitude-threshold masking of noise-dominated bins
//! - **Group delay**: Savitzky-Golay smoothed phase differentiation, in
//!   seconds per frequency bin
//! - **Reference signals**: pure tones and delayed impulses with known
//!   spectral behavior for validating the chain
//! - **Metric interpretation**: deterministic threshold tables mapping
//!   prominence, entropy, flatness, harmonicity, voiced ratio, and pitch
//!   deviation to qualitative labels
//!
//! ## Module Structure
//!
//! - `core` - waveform type, DSP primitives, phase and group delay analysis
//! - `interpret` - metric-to-label classification tables
//! - `testgen` - synthetic reference signal generation
//! - `cli` - terminal and JSON output formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use phaselens::core::{phase_spectrum, group_delay, SmoothingConfig};
//! use phaselens::testgen::generate_tone;
//! use phaselens::interpret;
//!
//! let tone = generate_tone(150.0, 1.0, 16000, 0.5)?;
//!
//! let spectrum = phase_spectrum(&tone, true, None)?;
//! let delay = group_delay(&tone, &SmoothingConfig::default())?;
//!
//! let label = interpret::interpret("entropy", 4.2)?;
//! assert_eq!(label, "Moderate");
//! # Ok::<(), phaselens::AnalysisError>(())
//! ```
//!
//! All analysis entry points are pure functions over immutable inputs; calls
//! may run in parallel across waveforms with no coordination.

// Core analysis functionality
pub mod core;

// Metric interpretation tables
pub mod interpret;

// Synthetic reference signals
pub mod testgen;

// Output formatting for the CLI
pub mod cli;

mod error;

// Re-export commonly used types at crate root for convenience
pub use crate::core::{
    group_delay, phase_spectrum, GroupDelayCurve, GroupDelayEstimator, PhaseSpectrum,
    SmoothingConfig, SpectralAnalyzer, Waveform,
};
pub use error::{AnalysisError, AnalysisResult};
pub use interpret::{interpret, interpret_all, Interpretation, InterpretationReport, Metric};
pub use testgen::{delayed_impulse, generate_tone};
