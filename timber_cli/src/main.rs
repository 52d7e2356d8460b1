//! # timber-beam
//!
//! Command-line driver for `timber_core`.
//!
//! ```text
//! timber-beam design beam.json          # report table
//! timber-beam design - --json < b.json  # JSON result from stdin
//! timber-beam grades                    # grade table
//! timber-beam example --overhang        # sample request
//! ```
//!
//! Exit status is 0 when every check passes, 1 when any check fails, and 2
//! on a configuration or input error.

mod logging;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use timber_core::calculations::{calculate, BeamDesignInput};
use timber_core::materials::all_grades;
use timber_core::CalcError;

#[derive(Parser)]
#[command(name = "timber-beam")]
#[command(author, version, about = "Timber beam design to NZS AS 1720.1")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Design a beam from a JSON request file ("-" reads stdin)
    Design {
        /// Request file, or "-" for stdin
        input: PathBuf,

        /// Print the full result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// List the available timber grades
    Grades,

    /// Print a sample JSON request
    Example {
        /// Overhanging beam instead of a simple span
        #[arg(long)]
        overhang: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::from(2)
        }
    }
}

/// Run a command; `Ok(false)` means the design ran but did not pass.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Design { input, json } => {
            let text = read_input(&input)?;
            let request = BeamDesignInput::from_json(&text)
                .with_context(|| format!("invalid request in {}", input.display()))?;
            tracing::debug!(label = %request.label, grade = %request.grade, "request parsed");
            let result = calculate(&request)?;
            tracing::info!(
                label = %result.label,
                passed = result.passes(),
                governing = %result.summary.governing_check,
                "design finished"
            );
            if json {
                println!("{}", result.to_json()?);
            } else {
                print!("{}", result.format_report());
            }
            Ok(result.passes())
        }
        Commands::Grades => {
            print!("{}", grades_table());
            Ok(true)
        }
        Commands::Example { overhang } => {
            println!("{}", BeamDesignInput::example(overhang).to_json()?);
            Ok(true)
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        tracing::debug!("reading request from stdin");
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
        Ok(text)
    } else {
        tracing::debug!(path = %path.display(), "reading request file");
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

fn grades_table() -> String {
    let mut out = format!(
        "{:<22} {:<12} {:>6} {:>6} {:>6} {:>7} {:>5} {:>4} {:>6}\n",
        "Grade", "Family", "f'b", "f's", "f'p", "E", "phi", "k2", "kg/m3"
    );
    out.push_str(&"-".repeat(82));
    out.push('\n');
    for g in all_grades() {
        out.push_str(&format!(
            "{:<22} {:<12} {:>6.1} {:>6} {:>6} {:>7.0} {:>5.2} {:>4.1} {:>6.0}\n",
            g.name,
            g.family.display_name(),
            g.fb_mpa,
            optional(g.fs_mpa),
            optional(g.fp_mpa),
            g.e_mpa,
            g.phi,
            g.k2,
            g.density_kg_m3
        ));
    }
    out
}
