//! # Taxonomy Subcommand
//!
//! Prints the canonical statuses with their badge descriptors, the unknown
//! fallback, and the alias table the engine was built with. Useful for
//! checking what a deployment's `--config` actually resolved to.

use anyhow::Result;
use serde::Serialize;

use hedu_status::{CanonicalStatus, MatchPolicy, StatusDescriptor, StatusEngine};

use crate::{print_json, OutputFormat};

#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry<'a> {
    pub status: CanonicalStatus,
    pub descriptor: &'a StatusDescriptor,
    pub color: &'static str,
    pub allowed_next: Vec<CanonicalStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AliasEntry<'a> {
    pub raw: &'a str,
    pub status: CanonicalStatus,
    pub legacy: bool,
}

/// Everything the engine knows, in one document.
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyReport<'a> {
    pub statuses: Vec<StatusEntry<'a>>,
    pub unknown: &'static StatusDescriptor,
    pub aliases: Vec<AliasEntry<'a>>,
    pub matching: MatchPolicy,
}

impl<'a> TaxonomyReport<'a> {
    pub fn build(engine: &'a StatusEngine) -> Self {
        let statuses = engine
            .taxonomy()
            .iter()
            .map(|(status, descriptor)| StatusEntry {
                status,
                descriptor,
                color: descriptor.severity.color(),
                allowed_next: engine.allowed_next_states(status.as_str()).to_vec(),
            })
            .collect();

        let aliases = engine
            .aliases()
            .entries()
            .map(|(raw, status)| AliasEntry {
                raw,
                status,
                legacy: raw.parse::<CanonicalStatus>().is_err(),
            })
            .collect();

        Self {
            statuses,
            unknown: engine.taxonomy().unknown(),
            aliases,
            matching: engine.aliases().policy(),
        }
    }
}

/// Execute the taxonomy subcommand.
pub fn run_taxonomy(engine: &StatusEngine, format: OutputFormat) -> Result<u8> {
    let report = TaxonomyReport::build(engine);

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            println!("statuses:");
            for entry in &report.statuses {
                let next: Vec<&str> = entry.allowed_next.iter().map(|s| s.as_str()).collect();
                println!(
                    "  {:<10} {:<10} {:<8} {:<14} next=[{}]",
                    entry.status.as_str(),
                    entry.descriptor.label,
                    entry.color,
                    entry.descriptor.icon,
                    next.join(", ")
                );
            }
            println!(
                "  {:<10} {:<10} {:<8} {}",
                "(unknown)",
                report.unknown.label,
                report.unknown.severity.color(),
                report.unknown.icon
            );

            println!("aliases:");
            for alias in &report.aliases {
                let marker = if alias.legacy { " (legacy)" } else { "" };
                println!("  {:<12} -> {}{marker}", alias.raw, alias.status);
            }

            println!(
                "matching: trim_whitespace={} case_insensitive={}",
                report.matching.trim_whitespace, report.matching.case_insensitive
            );
        }
    }

    Ok(0)
}
