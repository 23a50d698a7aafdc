//! # Status Engine Errors
//!
//! The classification path has a single failure kind, `UnrecognizedStatus`,
//! and only the strict resolver surfaces it. Everything else here belongs
//! to construction (alias tables, configuration) or to moderation actions.

use thiserror::Error;

use hedu_core::HeduError;

/// Errors produced by the status engine.
#[derive(Error, Debug)]
pub enum StatusError {
    /// The raw value is not in the alias table.
    #[error("unrecognized content status: {raw:?}")]
    UnrecognizedStatus {
        /// The raw value as received, `None` when the field was absent.
        raw: Option<String>,
    },

    /// The target status is not reachable from the current one.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status name.
        from: String,
        /// Attempted target status name.
        to: String,
    },

    /// An alias would remap a key that already resolves elsewhere.
    #[error("alias {alias:?} already resolves to {existing}, cannot remap to {requested}")]
    AliasConflict {
        /// The conflicting alias key after normalisation.
        alias: String,
        /// The status the key already resolves to.
        existing: String,
        /// The status the new entry asked for.
        requested: String,
    },

    /// A list filter name did not parse.
    #[error("unknown status filter: {0:?}")]
    InvalidFilter(String),

    /// Configuration could not be read or is malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error from the foundational types.
    #[error(transparent)]
    Core(#[from] HeduError),
}
