//! # Status Subcommand
//!
//! Resolve and describe one or more raw status values, the way a listing
//! page would render them.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hedu_status::{CanonicalStatus, DescribedStatus, Severity, StatusEngine, StatusFlags};

use crate::{print_json, OutputFormat};

/// Arguments for the status subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Raw status values as stored on content records.
    #[arg(required = true)]
    pub raw: Vec<String>,
}

/// Classification of a single raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub raw: String,
    pub recognized: bool,
    pub canonical: Option<CanonicalStatus>,
    pub label: String,
    pub severity: Severity,
    pub color: &'static str,
    pub flags: StatusFlags,
    pub allowed_next: Vec<CanonicalStatus>,
}

impl StatusReport {
    pub fn build(engine: &StatusEngine, raw: &str) -> Self {
        let resolution = engine.resolve(raw);
        let described = DescribedStatus::new(engine.taxonomy(), resolution.clone());
        Self {
            raw: raw.to_string(),
            recognized: resolution.is_recognized(),
            canonical: resolution.canonical(),
            label: described.label().to_string(),
            severity: described.severity(),
            color: described.severity().color(),
            flags: StatusFlags::of(&resolution),
            allowed_next: hedu_status::allowed_next_states(&resolution).to_vec(),
        }
    }

    /// One line of text output.
    pub fn render_line(&self) -> String {
        let canonical = self
            .canonical
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unrecognized".to_string());
        let next: Vec<&str> = self.allowed_next.iter().map(|s| s.as_str()).collect();
        format!(
            "{:<16} {:<14} {:<12} public={:<5} next=[{}]",
            format!("{:?}", self.raw),
            canonical,
            self.label,
            self.flags.public,
            next.join(", ")
        )
    }
}

/// Execute the status subcommand.
pub fn run_status(args: &StatusArgs, engine: &StatusEngine, format: OutputFormat) -> Result<u8> {
    let reports: Vec<StatusReport> = args
        .raw
        .iter()
        .map(|raw| StatusReport::build(engine, raw))
        .collect();

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.render_line());
            }
        }
    }

    let unrecognized = reports.iter().filter(|r| !r.recognized).count();
    tracing::info!(total = reports.len(), unrecognized, "status values described");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_legacy_alias() {
        let report = StatusReport::build(&StatusEngine::standard(), "approved");
        assert!(report.recognized);
        assert_eq!(report.canonical, Some(CanonicalStatus::Verified));
        assert_eq!(report.label, "Verified");
        assert_eq!(report.color, "green");
        assert!(report.flags.public);
        assert_eq!(
            report.allowed_next,
            vec![CanonicalStatus::Pending, CanonicalStatus::Rejected]
        );
    }

    #[test]
    fn report_for_unknown_value() {
        let report = StatusReport::build(&StatusEngine::standard(), "archived");
        assert!(!report.recognized);
        assert_eq!(report.canonical, None);
        assert_eq!(report.label, "archived");
        assert_eq!(report.severity, Severity::Neutral);
        assert!(report.flags.none());
        assert_eq!(report.allowed_next.len(), 3);
    }

    #[test]
    fn render_line_mentions_resolution() {
        let engine = StatusEngine::standard();
        let line = StatusReport::build(&engine, "refused").render_line();
        assert!(line.contains("\"refused\""));
        assert!(line.contains("rejected"));
        assert!(line.contains("next=[pending, verified]"));

        let line = StatusReport::build(&engine, "").render_line();
        assert!(line.contains("unrecognized"));
        assert!(line.contains("Unknown"));
    }

    #[test]
    fn report_serializes_flags() {
        let report = StatusReport::build(&StatusEngine::standard(), "pending");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["canonical"], "pending");
        assert_eq!(json["flags"]["pending"], true);
        assert_eq!(json["allowed_next"][0], "verified");
    }
}
