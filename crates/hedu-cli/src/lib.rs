//! # hedu-cli: Operator Tooling for the Status Engine
//!
//! Provides the `hedu` command-line interface. Handlers build a report from
//! the shared [`StatusEngine`] and print it as text or JSON; no
//! classification logic lives here.
//!
//! ## Subcommands
//!
//! - `hedu status`: resolve and describe raw status values.
//! - `hedu transitions`: legal next states, or validate one move.
//! - `hedu taxonomy`: canonical statuses, descriptors, and the alias table.
//! - `hedu audit`: summarise an exported JSON array of content records.
//!
//! ```bash
//! hedu status approved refused archived
//! hedu transitions approved --to rejected
//! hedu --config status.yaml audit export.json --strict
//! ```

pub mod audit;
pub mod status;
pub mod taxonomy;
pub mod transitions;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use hedu_status::{StatusConfig, StatusEngine};

/// How command output is printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Build the engine from `--config`, then `HEDU_STATUS_CONFIG`, then defaults.
pub fn load_engine(config: Option<&Path>) -> Result<StatusEngine> {
    let path = config
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(StatusConfig::ENV_VAR).map(PathBuf::from));

    match path {
        Some(path) => {
            let config = StatusConfig::load(&path)
                .with_context(|| format!("failed to load status config {}", path.display()))?;
            let engine = StatusEngine::from_config(&config)
                .with_context(|| format!("invalid alias table in {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                aliases = engine.aliases().len(),
                "status engine configured"
            );
            Ok(engine)
        }
        None => Ok(StatusEngine::standard()),
    }
}

/// Pretty-print a serializable report to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}
