// src/main.rs
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colorful::Colorful;

use phaselens::cli::{format_interpretation_report, format_tone_report, ToneReport};
use phaselens::core::{group_delay, phase_spectrum, SmoothingConfig};
use phaselens::interpret::interpret_all;
use phaselens::testgen::generate_tone;

#[derive(Parser, Debug)]
#[command(name = "phaselens")]
#[command(about = "Inspect spectral phase behavior and interpret acoustic metrics")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a reference tone and run the phase analysis chain on it
    Tone {
        /// Tone frequency in Hz
        #[arg(short, long, default_value = "150.0")]
        freq: f64,

        /// Duration in seconds
        #[arg(short, long, default_value = "1.0")]
        duration: f64,

        /// Sample rate in Hz
        #[arg(short, long, default_value = "16000")]
        sample_rate: u32,

        /// Peak amplitude
        #[arg(short, long, default_value = "0.5")]
        amplitude: f64,

        /// Mask phase at bins whose magnitude falls below this threshold
        #[arg(short, long)]
        mask_threshold: Option<f64>,

        /// Differentiate the raw unwrapped phase without smoothing
        #[arg(long)]
        no_smoothing: bool,

        /// Savitzky-Golay window length in bins (odd)
        #[arg(long, default_value = "101")]
        window_length: usize,

        /// Savitzky-Golay polynomial order
        #[arg(long, default_value = "3")]
        polyorder: usize,
    },

    /// Interpret metric=value pairs into qualitative labels
    Interpret {
        /// Observations such as entropy=4.2 voiced_ratio=0.8
        #[arg(required = true)]
        observations: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.command {
        Command::Tone {
            freq,
            duration,
            sample_rate,
            amplitude,
            mask_threshold,
            no_smoothing,
            window_length,
            polyorder,
        } => run_tone(
            &args,
            *freq,
            *duration,
            *sample_rate,
            *amplitude,
            *mask_threshold,
            SmoothingConfig {
                smooth_phase: !no_smoothing,
                window_length: *window_length,
                polyorder: *polyorder,
            },
        ),
        Command::Interpret { observations } => run_interpret(&args, observations),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_tone(
    args: &Args,
    freq: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f64,
    mask_threshold: Option<f64>,
    smoothing: SmoothingConfig,
) -> Result<()> {
    let tone = generate_tone(freq, duration, sample_rate, amplitude)
        .context("failed to generate reference tone")?;

    let spectrum = phase_spectrum(&tone, true, mask_threshold)?;
    let delay = group_delay(&tone, &smoothing)?;

    let report = ToneReport::build(freq, sample_rate, tone.len(), &spectrum, &delay);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_tone_report(&report, args.verbose));
        if freq >= sample_rate as f64 / 2.0 {
            println!("{}", "note: frequency above Nyquist, tone is aliased".yellow());
        }
    }

    Ok(())
}

fn run_interpret(args: &Args, observations: &[String]) -> Result<()> {
    let parsed = parse_observations(observations)?;
    let report = interpret_all(&parsed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", "Metric interpretation".cyan());
        print!("{}", format_interpretation_report(&report));
    }

    Ok(())
}

fn parse_observations(observations: &[String]) -> Result<Vec<(String, f64)>> {
    let mut parsed = Vec::with_capacity(observations.len());

    for obs in observations {
        let Some((name, value)) = obs.split_once('=') else {
            bail!("expected metric=value, got '{}'", obs);
        };
        let value: f64 = value
            .parse()
            .with_context(|| format!("invalid value in '{}'", obs))?;
        parsed.push((name.to_string(), value));
    }

    Ok(parsed)
}
