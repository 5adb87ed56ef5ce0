//! Kiln command-line front end
//!
//! Every command selects its variants by discriminator, from the command
//! line or from the configuration file, and never names a concrete type.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kiln_composition::catalog::Catalog;
use kiln_core::KilnConfig;
use std::path::{Path, PathBuf};

mod commands;

use commands::{assemble, calc, checkout, pay, persist};

#[derive(Parser)]
#[command(name = "kiln")]
#[command(about = "Kiln - select, assemble and adapt components by name", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "kiln.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one registered operation
    Calc(calc::CalcArgs),

    /// Save a main record through a storage family
    Persist(persist::PersistArgs),

    /// Run the step sequence over an assembler
    Assemble(assemble::AssembleArgs),

    /// Take a payment through the configured backend
    Pay(pay::PayArgs),

    /// Save an order and take its payment in one call
    Checkout(checkout::CheckoutArgs),
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let mut config = KilnConfig::load_or_default(path)
        .with_context(|| format!("loading {}", path.display()))?;
    config.merge_with_env()?;
    Ok(Catalog::from_config(&config)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let catalog = load_catalog(&cli.config)?;
    tracing::debug!(config = %cli.config.display(), family = %catalog.family, "catalog loaded");

    let output = match cli.command {
        Commands::Calc(args) => calc::run(args, &catalog)?,
        Commands::Persist(args) => persist::run(args, &catalog)?,
        Commands::Assemble(args) => assemble::run(args)?,
        Commands::Pay(args) => pay::run(args, &catalog)?,
        Commands::Checkout(args) => checkout::run(args, &catalog)?,
    };
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["kiln", "-v", "calc", "plus", "1", "2"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("kiln.toml"));
        assert!(matches!(cli.command, Commands::Calc(_)));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(catalog.family, "rdb");
    }

    #[test]
    fn test_config_selects_family() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[family]\nselected = \"xml\"").unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.family, "xml");
    }
}
