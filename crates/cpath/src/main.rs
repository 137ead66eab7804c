//! Command‑line entry point for the `cpath` tool.
//!
//! Renders chart points from JSON into SVG path data and lists the available
//! curve types.

use std::{fmt::Display, path::PathBuf, process};

use clap::{Parser, Subcommand};
use curvepath::{Layout, registry};
use log::LevelFilter;

/// CLI command implementations.
mod cmd;

use crate::cmd::{BaselineSource, RenderOptions};

/// Parse a `--digits` value, which must fit SVG-friendly precision.
fn parse_digits(s: &str) -> Result<u8, String> {
    let digits: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid digits '{s}': expected a non-negative integer"))?;
    if digits > 15 {
        return Err(format!("digits ({digits}) must be at most 15"));
    }
    Ok(digits)
}

/// Map the `-v` count onto a log level.
fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[derive(Parser)]
#[command(name = "cpath")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `cpath` tool.
enum Commands {
    #[command(about = "Render a JSON array of points as SVG path data")]
    /// Render points into path data.
    Render {
        #[arg(
            short = 't',
            long = "type",
            default_value = "linear",
            help = "Curve type (see list-curves)"
        )]
        /// Curve type name.
        curve: String,

        #[arg(long, help = "Reject unknown curve types instead of drawing them as linear")]
        /// Fail on names outside the registry.
        strict: bool,

        #[arg(
            long,
            default_value = "horizontal",
            help = "Chart orientation: horizontal or vertical"
        )]
        /// Chart orientation.
        layout: Layout,

        #[arg(
            long,
            value_name = "NUMBER",
            conflicts_with = "baseline_file",
            allow_negative_numbers = true,
            help = "Draw an area down to a constant baseline"
        )]
        /// Constant baseline.
        baseline: Option<f64>,

        #[arg(
            long = "baseline-file",
            value_name = "PATH",
            help = "Draw an area down to per-point baselines read from JSON"
        )]
        /// Per-point baseline file.
        baseline_file: Option<PathBuf>,

        #[arg(long = "connect-nulls", help = "Bridge gaps left by missing points")]
        /// Bridge undefined points.
        connect_nulls: bool,

        #[arg(long = "connect-nan", help = "Skip points whose value is not a number")]
        /// Skip NaN values.
        connect_nan: bool,

        #[arg(
            long,
            value_name = "N",
            value_parser = parse_digits,
            help = "Round coordinates to N fractional digits"
        )]
        /// Coordinate rounding.
        digits: Option<u8>,

        #[arg(long, help = "Path data to print when there are no points")]
        /// Empty-input fallback.
        fallback: Option<String>,

        #[arg(help = "Input JSON file (reads stdin when omitted)")]
        /// Input file.
        input: Option<PathBuf>,
    },
    #[command(about = "List the supported curve types")]
    /// List the supported curve types.
    ListCurves,
}

/// Print a result or report an error and exit non-zero.
fn report<T, E: Display>(result: Result<T, E>, ok: impl FnOnce(T)) {
    match result {
        Ok(v) => ok(v),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Handle the `list-curves` subcommand.
fn handle_list_curves() {
    println!("Supported curves (key — display — summary):");
    for entry in registry::REGISTRY {
        println!("- {} — {} — {}", entry.key, entry.display, entry.summary);
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_filter(cli.v))
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Render {
            curve,
            strict,
            layout,
            baseline,
            baseline_file,
            connect_nulls,
            connect_nan,
            digits,
            fallback,
            input,
        } => {
            let baseline = match (baseline, baseline_file.as_deref()) {
                (Some(v), _) => BaselineSource::Value(v),
                (None, Some(path)) => BaselineSource::File(path),
                (None, None) => BaselineSource::None,
            };
            let opts = RenderOptions {
                input: input.as_deref(),
                curve: &curve,
                strict,
                layout,
                baseline,
                connect_nulls,
                connect_nan,
                digits,
                fallback: fallback.as_deref(),
            };
            report(cmd::render(&opts), |path| {
                if let Some(path) = path {
                    println!("{path}");
                }
            });
        }
        Commands::ListCurves => handle_list_curves(),
    }
}
