//! # hedu CLI entry point
//!
//! Parses command-line arguments, configures logging, builds the status
//! engine once, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hedu_cli::audit::{run_audit, AuditArgs};
use hedu_cli::status::{run_status, StatusArgs};
use hedu_cli::taxonomy::run_taxonomy;
use hedu_cli::transitions::{run_transitions, TransitionsArgs};
use hedu_cli::{load_engine, OutputFormat};

/// Content status tooling for the hedu platform.
///
/// Resolves stored moderation statuses (legacy aliases included) to their
/// canonical form, shows badge metadata and legal moderation moves, and
/// audits exported content records for values the platform cannot classify.
#[derive(Parser, Debug)]
#[command(name = "hedu", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a status configuration file (YAML). Falls back to
    /// `HEDU_STATUS_CONFIG`, then the built-in alias table.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Output format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve and describe raw status values.
    Status(StatusArgs),

    /// List legal next states for a stored status, or check one move.
    Transitions(TransitionsArgs),

    /// Show canonical statuses, badge descriptors, and the alias table.
    Taxonomy,

    /// Summarise the statuses in a JSON export of content records.
    Audit(AuditArgs),
}

fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_format);
    tracing::debug!("hedu CLI starting");

    let engine = match load_engine(cli.config.as_deref()) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Status(args) => run_status(&args, &engine, cli.format),
        Commands::Transitions(args) => run_transitions(&args, &engine, cli.format),
        Commands::Taxonomy => run_taxonomy(&engine, cli.format),
        Commands::Audit(args) => run_audit(&args, &engine, cli.format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedu_status::{CanonicalStatus, StatusFilter};

    #[test]
    fn cli_parse_status_multiple_values() {
        let cli = Cli::try_parse_from(["hedu", "status", "approved", "refused", "archived"]).unwrap();
        if let Commands::Status(args) = cli.command {
            assert_eq!(args.raw, vec!["approved", "refused", "archived"]);
        } else {
            panic!("expected status subcommand");
        }
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn cli_parse_status_requires_a_value() {
        assert!(Cli::try_parse_from(["hedu", "status"]).is_err());
    }

    #[test]
    fn cli_parse_status_accepts_empty_string() {
        let cli = Cli::try_parse_from(["hedu", "status", ""]).unwrap();
        if let Commands::Status(args) = cli.command {
            assert_eq!(args.raw, vec![""]);
        }
    }

    #[test]
    fn cli_parse_transitions_with_target() {
        let cli =
            Cli::try_parse_from(["hedu", "transitions", "approved", "--to", "rejected"]).unwrap();
        if let Commands::Transitions(args) = cli.command {
            assert_eq!(args.raw, "approved");
            assert_eq!(args.to, Some(CanonicalStatus::Rejected));
        } else {
            panic!("expected transitions subcommand");
        }
    }

    #[test]
    fn cli_parse_transitions_rejects_alias_target() {
        // Targets must be canonical; legacy aliases are only read, never written.
        assert!(Cli::try_parse_from(["hedu", "transitions", "pending", "--to", "approved"]).is_err());
    }

    #[test]
    fn cli_parse_taxonomy_json() {
        let cli = Cli::try_parse_from(["hedu", "--format", "json", "taxonomy"]).unwrap();
        assert!(matches!(cli.command, Commands::Taxonomy));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn cli_parse_audit_flags() {
        let cli = Cli::try_parse_from([
            "hedu",
            "audit",
            "export.json",
            "--filter",
            "unrecognized",
            "--strict",
        ])
        .unwrap();
        if let Commands::Audit(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("export.json"));
            assert_eq!(args.filter, Some(StatusFilter::Unrecognized));
            assert!(args.strict);
        } else {
            panic!("expected audit subcommand");
        }
    }

    #[test]
    fn cli_parse_audit_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["hedu", "audit", "x.json", "--filter", "approved"]).is_err());
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hedu",
            "taxonomy",
            "-vv",
            "--config",
            "status.yaml",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("status.yaml")));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn cli_parse_no_subcommand_fails() {
        assert!(Cli::try_parse_from(["hedu"]).is_err());
    }
}
