use std::path::PathBuf;

use rdag_catalog::{CatalogFile, OperationCatalog, TerminalCatalog, reference_operations};
use rdag_config::GeneratorConfig;
use rdag_core::{log_debug, log_info};
use rdag_synth::{EmitOptions, Synthesizer};

use crate::args::Cli;
use crate::error::{CliError, CliResult};
use crate::output::atomic_write;

/// Run one generation: load config and catalogs, render the selected
/// artifact, write it. Nothing is written unless every step succeeds.
pub fn execute(cli: &Cli) -> CliResult<()> {
    let kind = cli.artifact.selected().ok_or_else(|| CliError::Usage {
        message: "exactly one artifact flag must be given".to_string(),
    })?;

    let config = GeneratorConfig::load(cli.config.as_deref())?;
    if let Some(source) = config.source() {
        log_debug!("cli", "Using configuration {}", source.display());
    }

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path());
    let (operations, terminals) = load_catalogs(catalog_path)?;

    let options = EmitOptions {
        namespace: config.emit.namespace.clone(),
        java_package: config.emit.java_package.clone(),
    };
    let synth = Synthesizer::new(&operations, &terminals, options)?;

    log_info!("cli", "Generating {} into {}", kind, cli.output.display());
    let text = synth.artifact(kind)?;
    atomic_write(&cli.output, &text)
}

fn load_catalogs(path: Option<PathBuf>) -> CliResult<(OperationCatalog, TerminalCatalog)> {
    match path {
        Some(path) => {
            log_info!("cli", "Loading catalog {}", path.display());
            Ok(CatalogFile::from_file(&path)?.into_catalogs()?)
        }
        None => Ok((reference_operations()?, TerminalCatalog::reference())),
    }
}
