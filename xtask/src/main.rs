//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    io::ErrorKind,
    path::PathBuf,
    process::{self, Command},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Library crate holding the curve generators.
const LIB_CRATE: &str = "curvepath";
/// Binary crate holding the `cpath` CLI.
const CLI_CRATE: &str = "cpath";

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests, preferring cargo nextest when it is installed.
    Test,
    /// Run the path generation benchmarks.
    Bench {
        /// Only run benchmarks whose name contains this filter.
        filter: Option<String>,
    },
    /// Render the sample area paths and list the curve registry.
    Demo,
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// Directory holding the library crate.
    lib: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self {
            lib: root.join("crates").join(LIB_CRATE),
            root,
        })
    }

    /// Fail early when the expected crate layout is missing.
    fn check(&self) -> Result<()> {
        let manifest = self.lib.join("Cargo.toml");
        if !manifest.is_file() {
            bail!("expected library manifest at {}", manifest.display());
        }
        Ok(())
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;
    paths.check()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Bench { filter } => bench(&paths, filter.as_deref()),
        CommandName::Demo => demo(&paths),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run the workspace tests, including doctests.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    if has_command("cargo-nextest")? {
        cmd!(sh, "cargo nextest run --all").run()?;
        // nextest does not run doctests
        cmd!(sh, "cargo test --doc -p {LIB_CRATE}").run()?;
    } else {
        println!("cargo-nextest not found; falling back to cargo test.");
        cmd!(sh, "cargo test --all").run()?;
    }
    Ok(())
}

/// Run the criterion benchmarks for the library crate.
fn bench(paths: &RepoPaths, filter: Option<&str>) -> Result<()> {
    let sh = repo_shell(paths)?;
    let filter: Vec<&str> = filter.into_iter().collect();
    cmd!(sh, "cargo bench -p {LIB_CRATE} --bench paths -- {filter...}").run()?;
    Ok(())
}

/// Run the bundled example and print the registry through the CLI.
fn demo(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo run -q -p {LIB_CRATE} --example area").run()?;
    println!();
    cmd!(sh, "cargo run -q -p {CLI_CRATE} -- list-curves").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}

/// Return `true` when `name` is found on `$PATH`.
fn has_command(name: &str) -> Result<bool> {
    match Command::new(name).arg("--help").output() {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("failed to probe for {name}")),
    }
}
