//! Command-line interface for the bayes-priors library
//!
//! This binary inspects and converts prior specifications:
//! - Describing priors written in the short string form
//! - Converting a JSON collection of named priors into `statrs` models
//! - Writing a JSON collection from short-form specifications
//!
//! # Usage
//!
//! ```bash
//! # Show what a few priors convert to
//! priors describe "Sd(2, 10)" "Normal(0, 1)" "U(5, 2)"
//!
//! # Convert every prior in a collection
//! priors convert --path priors.json
//!
//! # Create a collection
//! priors write --output priors.json --prior sigma="Sd(2, 10)" --prior phi="Ar1(0.9, 0.1)"
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bayes_priors::{
    io::{load_priors, save_priors, PriorCollection},
    models::StatrsFactory,
    priors::PriorSpec,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;
use tabled::{builder::Builder, settings::Style};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Parse short-form priors and show the models they convert to
    Describe {
        /// Priors in the form 'Name(param1, param2, ...)'
        #[arg(required = true)]
        specs: Vec<String>,
    },
    /// Convert every prior of a JSON collection
    Convert {
        /// Path to the JSON file containing the named priors
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Write a JSON collection from short-form priors
    Write {
        /// Path of the JSON file to create
        #[arg(short, long)]
        output: PathBuf,

        /// Named prior in the form 'name=Name(param1, ...)'
        #[arg(short, long = "prior", value_parser = parse_named_prior, required = true)]
        priors: Vec<(String, PriorSpec)>,
    },
}

/// Parses `name=Spec(...)` arguments of the `write` command.
fn parse_named_prior(s: &str) -> Result<(String, PriorSpec), String> {
    let (name, spec) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected 'name=Spec(...)', got '{s}'"))?;
    let spec = spec.parse::<PriorSpec>().map_err(|e| e.to_string())?;
    Ok((name.trim().to_string(), spec))
}

/// Renders one row per prior with the result of converting it.
fn conversion_table<'a>(priors: impl IntoIterator<Item = (&'a str, &'a PriorSpec)>) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Name", "Prior", "Model"]);

    for (name, prior) in priors {
        let model = match prior.to_model(&StatrsFactory) {
            Ok(model) => model.to_string().green().to_string(),
            Err(e) => e.to_string().red().to_string(),
        };
        builder.push_record(vec![name.to_string(), prior.to_string(), model]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

fn describe(specs: &[String]) -> ExitCode {
    let mut parsed = Vec::new();
    let mut failed = false;

    for spec in specs {
        match spec.parse::<PriorSpec>() {
            Ok(prior) => parsed.push((spec.as_str(), prior)),
            Err(e) => {
                eprintln!("{} {}", "Error:".bold().red(), e);
                failed = true;
            }
        }
    }

    if !parsed.is_empty() {
        println!(
            "{}",
            conversion_table(parsed.iter().map(|(name, prior)| (*name, prior)))
        );
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert(path: &Path) -> ExitCode {
    match load_priors(path) {
        Ok(priors) => {
            println!(
                "{}",
                conversion_table(priors.iter().map(|(name, prior)| (name.as_str(), prior)))
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}

fn write(output: &Path, priors: &[(String, PriorSpec)]) -> ExitCode {
    let collection: PriorCollection = priors.iter().cloned().collect();

    match save_priors(output, &collection) {
        Ok(()) => {
            println!(
                "Wrote {} to {}",
                collection.keys().join(", ").bold(),
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Describe { specs } => describe(specs),
        Commands::Convert { path } => convert(path),
        Commands::Write { output, priors } => write(output, priors),
    }
}
