//! # Status Engine
//!
//! [`StatusEngine`] bundles the alias table and the descriptor table into
//! one immutable value. Build it once at startup and hand out `&StatusEngine`
//! (or an `Arc`) to whatever needs classification. It holds no interior
//! mutability, so it is `Send + Sync` and callers need no coordination.
//!
//! Every raw-status entry point accepts `&str` or `Option<&str>`; `None`
//! stands for a record whose status field is missing.

use hedu_core::ContentRecord;

use crate::alias::{AliasTable, Resolution};
use crate::config::StatusConfig;
use crate::error::StatusError;
use crate::filter::{HasRawStatus, StatusFilter, StatusSummary};
use crate::predicates::{self, StatusFlags};
use crate::presentation::DescribedStatus;
use crate::taxonomy::{CanonicalStatus, StatusDescriptor, StatusTaxonomy};
use crate::transition::{self, ModerationEvidence, StatusChange};

/// Immutable classification engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEngine {
    aliases: AliasTable,
    taxonomy: StatusTaxonomy,
}

impl StatusEngine {
    pub fn new(aliases: AliasTable, taxonomy: StatusTaxonomy) -> Self {
        tracing::debug!(aliases = aliases.len(), "status engine constructed");
        Self { aliases, taxonomy }
    }

    /// Built-in aliases and the standard taxonomy.
    pub fn standard() -> Self {
        Self::new(AliasTable::builtin(), StatusTaxonomy::standard())
    }

    /// Engine for a loaded configuration.
    pub fn from_config(config: &StatusConfig) -> Result<Self, StatusError> {
        Ok(Self::new(config.alias_table()?, StatusTaxonomy::standard()))
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn taxonomy(&self) -> &StatusTaxonomy {
        &self.taxonomy
    }

    // ── Resolution ───────────────────────────────────────────────────

    pub fn resolve<'r>(&self, raw: impl Into<Option<&'r str>>) -> Resolution {
        self.aliases.resolve(raw.into())
    }

    /// Resolve without the per-value warning. For callers that walk many
    /// records and report unrecognized values once.
    pub fn classify<'r>(&self, raw: impl Into<Option<&'r str>>) -> Resolution {
        self.aliases.classify(raw.into())
    }

    pub fn resolve_strict<'r>(
        &self,
        raw: impl Into<Option<&'r str>>,
    ) -> Result<CanonicalStatus, StatusError> {
        self.aliases.resolve_strict(raw.into())
    }

    pub fn resolve_or<'r>(
        &self,
        raw: impl Into<Option<&'r str>>,
        default: CanonicalStatus,
    ) -> CanonicalStatus {
        self.aliases.resolve_or(raw.into(), default)
    }

    // ── Predicates ───────────────────────────────────────────────────

    pub fn is_public<'r>(&self, raw: impl Into<Option<&'r str>>) -> bool {
        predicates::is_public(&self.resolve(raw))
    }

    pub fn is_pending<'r>(&self, raw: impl Into<Option<&'r str>>) -> bool {
        predicates::is_pending(&self.resolve(raw))
    }

    pub fn is_rejected<'r>(&self, raw: impl Into<Option<&'r str>>) -> bool {
        predicates::is_rejected(&self.resolve(raw))
    }

    pub fn is_verified<'r>(&self, raw: impl Into<Option<&'r str>>) -> bool {
        predicates::is_verified(&self.resolve(raw))
    }

    /// All four predicates from a single resolution.
    pub fn flags<'r>(&self, raw: impl Into<Option<&'r str>>) -> StatusFlags {
        StatusFlags::of(&self.resolve(raw))
    }

    // ── Transitions ──────────────────────────────────────────────────

    pub fn allowed_next_states<'r>(
        &self,
        raw: impl Into<Option<&'r str>>,
    ) -> &'static [CanonicalStatus] {
        transition::allowed_next_states(&self.resolve(raw))
    }

    pub fn check_transition<'r>(
        &self,
        raw: impl Into<Option<&'r str>>,
        target: CanonicalStatus,
    ) -> Result<(), StatusError> {
        transition::check_transition(&self.resolve(raw), target)
    }

    /// Validate a moderator action on `record` and describe the write it implies.
    pub fn propose_change(
        &self,
        record: &ContentRecord,
        target: CanonicalStatus,
        evidence: ModerationEvidence,
    ) -> Result<StatusChange, StatusError> {
        let current = self.resolve(record.raw_status());
        StatusChange::propose(record.id, record.raw_status(), &current, target, evidence)
    }

    // ── Presentation ─────────────────────────────────────────────────

    pub fn describe(&self, status: CanonicalStatus) -> &StatusDescriptor {
        self.taxonomy.describe(status)
    }

    /// Resolve then describe. Unrecognized input yields the unknown marker.
    pub fn describe_raw<'r>(&self, raw: impl Into<Option<&'r str>>) -> DescribedStatus<'_> {
        DescribedStatus::new(&self.taxonomy, self.resolve(raw))
    }

    // ── Listings ─────────────────────────────────────────────────────

    /// Items matching `filter`, in input order. Logs at most one warning
    /// for the whole slice.
    pub fn filter<'a, T: HasRawStatus>(&self, items: &'a [T], filter: StatusFilter) -> Vec<&'a T> {
        let mut unrecognized = 0usize;
        let matched = items
            .iter()
            .filter(|item| {
                let resolution = self.classify(item.raw_status());
                if !resolution.is_recognized() {
                    unrecognized += 1;
                }
                filter.matches(&resolution)
            })
            .collect();
        if unrecognized > 0 {
            tracing::warn!(
                total = items.len(),
                unrecognized,
                "unrecognized content statuses in listing"
            );
        }
        matched
    }

    /// Per-status counts over `items`. Logs at most one warning for the
    /// whole slice.
    pub fn summarize<T: HasRawStatus>(&self, items: &[T]) -> StatusSummary {
        let mut summary = StatusSummary::default();
        for item in items {
            summary.record(&self.classify(item.raw_status()));
        }
        if !summary.is_clean() {
            summary.warn_unrecognized();
        }
        summary
    }
}

impl Default for StatusEngine {
    fn default() -> Self {
        Self::standard()
    }
}
