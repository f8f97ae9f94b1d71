//! Output formatting for the CLI.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use dome_core::{CalcError, DomeResult};

/// Output format for results and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Write a value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Write a calculation result in the requested format.
pub fn write_result<W: Write>(out: &mut W, result: &DomeResult, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, result),
        OutputFormat::Text => out.write_all(render_report(result).as_bytes()),
    }
}

/// Text summary: input, geometry, per-level counts and the overall total.
pub fn render_report(result: &DomeResult) -> String {
    let mut report = String::new();
    let mut line = |text: String| {
        report.push_str(&text);
        report.push('\n');
    };

    line("═══════════════════════════════════════".into());
    line("  DOME SHELL RESULTS".into());
    line("═══════════════════════════════════════".into());
    line(String::new());
    line("Input:".into());
    line(format!("  Height:  {} blocks", result.params.height));
    line(format!("  Chord:   {} blocks", result.params.chord));
    line(String::new());
    line("Geometry:".into());
    line(format!("  Radius:        {:.4}", result.geometry.radius));
    line(format!(
        "  Center depth:  {:.4} below base",
        result.geometry.center_depth(result.params.height)
    ));
    line(format!("  Cells checked: {}", result.evaluations));
    line(String::new());
    line("Levels (1 = base):".into());
    for layer in &result.layers {
        line(format!("  Level {:>3}: {}", layer.level(), layer.breakdown()));
    }
    line(String::new());
    line("═══════════════════════════════════════".into());
    line(format!("  OVERALL: {}", result.breakdown()));
    line("═══════════════════════════════════════".into());

    report
}

/// Write a calculation error; JSON output also gets the structured form.
pub fn write_error<W: Write>(out: &mut W, err: &CalcError, format: OutputFormat) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;
    if format == OutputFormat::Json {
        writeln!(out)?;
        writeln!(out, "Error JSON:")?;
        write_json(out, err)?;
    }
    Ok(())
}
