//! # Transitions Subcommand
//!
//! Lists the moves a moderator may make from a stored status, or checks a
//! single move with `--to`.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hedu_status::{CanonicalStatus, StatusEngine};

use crate::{print_json, OutputFormat};

/// Arguments for the transitions subcommand.
#[derive(Args, Debug)]
pub struct TransitionsArgs {
    /// Current raw status of the content item.
    pub raw: String,

    /// Canonical status to validate a move to.
    #[arg(long)]
    pub to: Option<CanonicalStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionsReport {
    pub raw: String,
    pub current: Option<CanonicalStatus>,
    pub allowed_next: Vec<CanonicalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<CanonicalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<bool>,
}

impl TransitionsReport {
    pub fn build(engine: &StatusEngine, raw: &str, target: Option<CanonicalStatus>) -> Self {
        let resolution = engine.resolve(raw);
        let legal = target.map(|t| hedu_status::check_transition(&resolution, t).is_ok());
        Self {
            raw: raw.to_string(),
            current: resolution.canonical(),
            allowed_next: hedu_status::allowed_next_states(&resolution).to_vec(),
            target,
            legal,
        }
    }
}

/// Execute the transitions subcommand. Returns 1 for an illegal `--to`.
pub fn run_transitions(
    args: &TransitionsArgs,
    engine: &StatusEngine,
    format: OutputFormat,
) -> Result<u8> {
    let report = TransitionsReport::build(engine, &args.raw, args.to);

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            let current = report
                .current
                .map(|c| c.to_string())
                .unwrap_or_else(|| format!("unrecognized ({:?})", report.raw));
            println!("current: {current}");
            for status in &report.allowed_next {
                println!("  -> {status}");
            }
        }
    }

    match (report.target, report.legal) {
        (Some(target), Some(false)) => {
            tracing::warn!(raw = %args.raw, to = %target, "transition not allowed");
            Ok(1)
        }
        (Some(target), _) => {
            tracing::info!(raw = %args.raw, to = %target, "transition allowed");
            Ok(0)
        }
        (None, _) => Ok(0),
    }
}
