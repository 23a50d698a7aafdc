//! # hedu-status: Content Status Lifecycle Engine
//!
//! Classifies user-submitted content (documents, videos, 3D models) into a
//! canonical moderation state, supplies consistent badge metadata, and
//! decides which status changes a moderator may make.
//!
//! ## Flow
//!
//! ```text
//! raw status ──▶ AliasTable::resolve ──▶ Resolution ──┬──▶ predicates
//!  (any string,                                       ├──▶ transition policy
//!   or absent)                                        └──▶ presentation
//! ```
//!
//! The resolver is the only code that looks at a raw string. Everything
//! downstream matches exhaustively on [`CanonicalStatus`].
//!
//! ## Unrecognized Statuses
//!
//! A value outside the alias table is never guessed at. It resolves to
//! [`Resolution::Unrecognized`], a warning is logged, every visibility
//! predicate answers `false`, the badge falls back to the neutral unknown
//! descriptor, and a moderator may move it to any canonical status. The
//! engine does not rewrite stored values; a moderator action does.
//!
//! ## Modules
//!
//! - `taxonomy`: `CanonicalStatus`, `Severity`, `StatusDescriptor`.
//! - `alias`: legacy alias table and resolution.
//! - `predicates`: fail-closed visibility queries.
//! - `transition`: legal next states and change proposals.
//! - `presentation`: resolution → badge descriptor.
//! - `filter`: listing filters and per-status counts.
//! - `config`: YAML startup configuration.
//! - `engine`: the assembled, shareable `StatusEngine`.

pub mod alias;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod predicates;
pub mod presentation;
pub mod taxonomy;
pub mod transition;

// ─── Taxonomy re-exports ────────────────────────────────────────────

pub use taxonomy::{
    CanonicalStatus, Severity, StatusDescriptor, StatusTaxonomy, CANONICAL_STATUS_COUNT,
    UNKNOWN_DESCRIPTOR,
};

// ─── Resolution re-exports ──────────────────────────────────────────

pub use alias::{
    AliasTable, AliasTableBuilder, MatchPolicy, Resolution, ABSENT_STATUS, BUILTIN_LEGACY_ALIASES,
};

// ─── Policy re-exports ──────────────────────────────────────────────

pub use predicates::StatusFlags;
pub use transition::{allowed_next_states, check_transition, ModerationEvidence, StatusChange};

// ─── Engine re-exports ──────────────────────────────────────────────

pub use config::StatusConfig;
pub use engine::StatusEngine;
pub use error::StatusError;
pub use filter::{HasRawStatus, StatusFilter, StatusSummary};
pub use presentation::DescribedStatus;
