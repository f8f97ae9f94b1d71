//! # Dome Calculator CLI
//!
//! Computes a one-block-thick dome shell and prints the block counts per
//! level, either as a text summary or as the full JSON result.
//!
//! ```text
//! dome_cli 5 10
//! dome_cli 12 30 --format json --parallel
//! RUST_LOG=dome_core=debug dome_cli 5 10
//! ```

mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dome_core::{CalculatorSettings, DomeParameters, ShellCalculator};
use output::OutputFormat;

/// Exit status for a completed calculation
const EXIT_SUCCESS: u8 = 0;

/// Exit status when the result or error could not be written
const EXIT_OUTPUT_FAILURE: u8 = 1;

/// Exit status for rejected parameters
const EXIT_INVALID_PARAMETERS: u8 = 2;

/// Dome Calculator: block counts for a one-block-thick spherical dome
#[derive(Parser, Debug)]
#[command(name = "dome_cli", version)]
#[command(about = "Compute the blocks of a one-block-thick spherical dome")]
struct Args {
    /// Dome height in blocks (at least 1)
    height: u32,

    /// Base chord (diameter) in blocks (at least 2, and at least 2 * height - 1)
    chord: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Compute layers in parallel
    #[arg(long)]
    parallel: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(args: &Args) {
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so JSON on stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run one calculation, writing the result to `out` and errors to `err_out`.
///
/// Returns the process exit status.
fn run<O: Write, E: Write>(args: &Args, out: &mut O, err_out: &mut E) -> u8 {
    let settings = if args.parallel {
        CalculatorSettings::parallel()
    } else {
        CalculatorSettings::default()
    };
    let calculator = ShellCalculator::new(settings);
    let params = DomeParameters {
        height: args.height,
        chord: args.chord,
    };

    match calculator.compute(&params) {
        Ok(result) => match output::write_result(out, &result, args.format).and_then(|()| out.flush()) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "failed to write result");
                let _ = writeln!(err_out, "Error: failed to write result: {}", e);
                EXIT_OUTPUT_FAILURE
            }
        },
        Err(calc_err) => {
            if let Err(e) = output::write_error(err_out, &calc_err, args.format) {
                tracing::error!(error = %e, "failed to write error report");
            }
            EXIT_INVALID_PARAMETERS
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let status = run(&args, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(status)
}
