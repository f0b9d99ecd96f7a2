//! Console and file rendering of batch results.

use std::fs;
use std::io;
use std::path::Path;

use crate::validation::BatchReport;

pub const BANNER: &str = "=== EMAIL MX RECORD CHECK ===";

/// Width of the `=` separator lines on the console
const SEPARATOR_WIDTH: usize = 50;

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// The three summary lines: total, valid, invalid
pub fn summary_lines(report: &BatchReport) -> [String; 3] {
    [
        format!("Total checked: {}", report.total()),
        format!("Valid: {}", report.valid()),
        format!("Invalid: {}", report.invalid()),
    ]
}

/// Render the results and summary exactly as saved to an output file
pub fn render_file(report: &BatchReport) -> String {
    let mut out = report.lines().collect::<Vec<_>>().join("\n");
    out.push('\n');
    for line in summary_lines(report) {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

/// Save results plus summary to `path`
pub fn write_report(path: &Path, report: &BatchReport) -> io::Result<()> {
    fs::write(path, render_file(report))?;
    log::info!("Wrote {} results to {}", report.total(), path.display());
    Ok(())
}

/// Print the closing separator and summary to stdout
pub fn print_summary(report: &BatchReport) {
    println!("{}", separator());
    for line in summary_lines(report) {
        println!("{}", line);
    }
}
