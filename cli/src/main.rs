mod command;

use anyhow::{Result, anyhow};
use clap::Parser;
use label_core::{Catalog, LabelResolver, Locale};
use label_kit::{config::LabelConfig, logger::init_tracing};
use tracing::{debug, error, warn};

use crate::command::{Cli, execute};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.command.needs_catalog() {
        let resolver = LabelResolver::new(Catalog::new(), Locale::default());
        println!("{}", execute(&resolver, &cli.command));
        return Ok(());
    }

    let config_file = cli
        .config_file
        .as_ref()
        .ok_or_else(|| anyhow!("a config file is required, pass --config <FILE>"))?;
    let config = LabelConfig::from(config_file)?;
    let _guard = init_tracing(config.log_level, config.log_path().as_deref())?;
    debug!("Loaded config {}", config_file.display());

    let resolver = config.resolver(cli.locale.clone()).map_err(|e| {
        error!("Error: {:#}", e);
        e
    })?;
    if resolver.catalog().is_empty() {
        warn!(
            "No catalogs found in {}, every label will fall back",
            config.catalog_path().display()
        );
    }
    debug!(
        "Resolving with locale {} (fallback {})",
        resolver.locale(),
        resolver.fallback_locale()
    );
    println!("{}", execute(&resolver, &cli.command));
    Ok(())
}
