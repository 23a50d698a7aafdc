//! # Audit Subcommand
//!
//! Reads a storage export (a JSON array of content records), resolves every
//! status once, and prints per-status counts. Unrecognized values are
//! reported in a single log line rather than one per record. With
//! `--filter` the matching records are listed as well. With `--strict` the
//! command exits with code 2 when any record carries an unrecognized or
//! missing status, so it can gate a deploy or a nightly job.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hedu_core::{ContentId, ContentKind, ContentRecord};
use hedu_status::{CanonicalStatus, DescribedStatus, StatusEngine, StatusFilter, StatusSummary};

use crate::{print_json, OutputFormat};

/// Exit code for `--strict` when unrecognized statuses are present.
pub const EXIT_UNRECOGNIZED: u8 = 2;

/// Arguments for the audit subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// JSON file containing an array of content records.
    pub file: PathBuf,

    /// Only list records matching this filter.
    #[arg(long)]
    pub filter: Option<StatusFilter>,

    /// Fail with exit code 2 if any status is unrecognized.
    #[arg(long)]
    pub strict: bool,
}

/// One listed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: String,
    pub raw_status: Option<String>,
    pub status: Option<CanonicalStatus>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<StatusFilter>,
    pub summary: StatusSummary,
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    pub fn build(
        engine: &StatusEngine,
        records: &[ContentRecord],
        filter: Option<StatusFilter>,
    ) -> Self {
        let mut summary = StatusSummary::default();
        let mut entries = Vec::new();

        for record in records {
            let resolution = engine.classify(record.raw_status());
            summary.record(&resolution);
            match filter {
                Some(filter) if filter.matches(&resolution) => {}
                _ => continue,
            }
            let described = DescribedStatus::new(engine.taxonomy(), resolution.clone());
            entries.push(AuditEntry {
                id: record.id,
                kind: record.kind,
                title: record.title.clone(),
                raw_status: record.status.clone(),
                status: resolution.canonical(),
                label: described.label().to_string(),
            });
        }

        Self {
            filter,
            summary,
            entries,
        }
    }
}

/// Execute the audit subcommand.
pub fn run_audit(args: &AuditArgs, engine: &StatusEngine, format: OutputFormat) -> Result<u8> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let records = ContentRecord::list_from_json(&text)
        .with_context(|| format!("failed to parse content records in {}", args.file.display()))?;

    let report = AuditReport::build(engine, &records, args.filter);

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_text(&report),
    }

    let summary = &report.summary;
    tracing::info!(
        file = %args.file.display(),
        total = summary.total,
        unrecognized = summary.unrecognized,
        "audit complete"
    );

    if summary.is_clean() {
        return Ok(0);
    }
    if args.strict {
        tracing::error!(
            unrecognized = summary.unrecognized,
            absent = summary.absent,
            "unrecognized statuses present"
        );
        return Ok(EXIT_UNRECOGNIZED);
    }
    summary.warn_unrecognized();
    Ok(0)
}

fn print_text(report: &AuditReport) {
    let summary = &report.summary;
    println!("total:        {}", summary.total);
    for status in CanonicalStatus::all() {
        println!("{:<13} {}", format!("{status}:"), summary.count(*status));
    }
    println!("unrecognized: {} (absent: {})", summary.unrecognized, summary.absent);
    for (raw, count) in &summary.unrecognized_values {
        println!("  {raw:?} x{count}");
    }

    let Some(filter) = report.filter else {
        return;
    };
    println!();
    println!("{} record(s) matching {filter}:", report.entries.len());
    for entry in &report.entries {
        println!(
            "  {}  {:<8} {:<12} {}",
            entry.id, entry.kind.as_str(), entry.label, entry.title
        );
    }
}
