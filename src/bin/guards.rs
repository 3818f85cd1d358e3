//! Guard Generation CLI
//!
//! Loads a feature definition (JSON object graph as produced by a schema
//! front end) and prints the synthesized guard clauses and the closed
//! structure-type set.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use featuregen::emit::{display_name, to_camel_case};
use featuregen::{
    register_feature_structures, AnonymousTypeCloser, Feature, OverrideConfig,
    ValidationRegistry,
};

#[derive(Parser)]
#[command(name = "featuregen")]
#[command(about = "Generate validation guards from feature definitions")]
struct Cli {
    /// Path to an override metadata file (featuregen.toml)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print guard clauses for every constrained member
    Guards {
        /// Feature definition (JSON)
        feature: PathBuf,
    },

    /// Print the closed set of structure types
    Types {
        /// Feature definition (JSON)
        feature: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = OverrideConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Guards { feature } => {
            let feature = load_feature(&feature)?;

            match &feature.identifier {
                Some(id) => {
                    let meta = overrides.resolve(id);
                    println!("Feature: {} ({})", display_name(&feature.name), meta.identifier);
                    if let Some(originator) = meta.originator {
                        println!("Originator: {}", originator);
                    }
                    if let Some(version) = meta.version {
                        println!("Version: {}", version);
                    }
                }
                None => println!("Feature: {}", display_name(&feature.name)),
            }

            let registry = ValidationRegistry::with_defaults();
            let results = registry.validate_feature(&feature)?;

            if results.is_empty() {
                println!("\nNo constrained members");
                return Ok(());
            }

            for member in results {
                println!("\n{}", member.member);
                let leaf = member.member.rsplit('/').next().unwrap_or(&member.member);
                let ident = to_camel_case(leaf);
                for set in member.validations {
                    println!("  if {}", set.condition.render(&ident));
                    println!("     -> {}", set.message);
                }
            }
            Ok(())
        }

        Commands::Types { feature } => {
            let feature = load_feature(&feature)?;

            let mut closer = AnonymousTypeCloser::new();
            register_feature_structures(&feature, &mut closer);

            let mut count = 0;
            closer.process_all(|_, name, ty| {
                count += 1;
                println!("{} ({} fields)", name, ty.fields.len());
                Ok(())
            })?;

            println!("\n{} structure type(s)", count);
            Ok(())
        }
    }
}

fn load_feature(path: &Path) -> anyhow::Result<Feature> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let feature = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(feature)
}
