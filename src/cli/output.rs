//! Output formatting for CLI results

use crate::interpret::InterpretationReport;

use super::ToneReport;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";

/// Format a tone analysis summary for terminal output
pub fn format_tone_report(report: &ToneReport, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}{}Reference tone{} {:.1} Hz, {:.3} s @ {} Hz\n",
        CYAN, BOLD, RESET, report.freq_hz, report.duration_secs, report.sample_rate_hz
    ));

    output.push_str(&format!(
        "  spectrum: {} bins over {} samples {}({:.4} Hz/bin){}\n",
        report.bins, report.samples, DIM, report.freq_resolution_hz, RESET
    ));

    output.push_str(&format!(
        "  peak: {}{:.2} Hz{} (magnitude {:.1})\n",
        GREEN, report.peak_freq_hz, RESET, report.peak_magnitude
    ));

    output.push_str(&format!(
        "  group delay: mean {:+.3} us, max |tau| {:.3} us\n",
        report.mean_group_delay_us, report.max_abs_group_delay_us
    ));

    if report.masked_bins > 0 || verbose {
        output.push_str(&format!(
            "  {}masked bins: {} of {}{}\n",
            DIM, report.masked_bins, report.bins, RESET
        ));
    }

    output
}

/// Format an interpretation report for terminal output
pub fn format_interpretation_report(report: &InterpretationReport) -> String {
    let mut output = String::new();

    let width = report
        .entries
        .iter()
        .map(|e| e.metric.len())
        .max()
        .unwrap_or(0);

    for entry in &report.entries {
        output.push_str(&format!(
            "  {:width$}  {}{:>10.4}{}  {}{}{}\n",
            entry.metric,
            DIM,
            entry.value,
            RESET,
            BOLD,
            entry.label,
            RESET,
            width = width
        ));
    }

    output
}
