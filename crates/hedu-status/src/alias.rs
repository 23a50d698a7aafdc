//! # Legacy Alias Resolver
//!
//! Stored records were written by several generations of the dashboard.
//! Older ones carry values such as `approved` or `refused` that predate the
//! three-state model. [`AliasTable`] maps every string the platform has ever
//! persisted onto a [`CanonicalStatus`] so those records stay readable
//! without a data migration.
//!
//! ## Invariants
//!
//! - Every canonical name maps to itself, so resolution is idempotent.
//! - Every target is a `CanonicalStatus` by type, so one lookup always
//!   terminates resolution.
//! - A key is never remapped: adding an alias that already resolves to a
//!   different status is an [`StatusError::AliasConflict`].
//!
//! This module is the only place a raw status string is interpreted.
//! A miss is reported as [`Resolution::Unrecognized`] and logged; it is
//! never coerced to a canonical value.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;
use crate::taxonomy::CanonicalStatus;

/// Aliases persisted by earlier versions of the platform.
pub const BUILTIN_LEGACY_ALIASES: &[(&str, CanonicalStatus)] = &[
    ("accepted", CanonicalStatus::Verified),
    ("approved", CanonicalStatus::Verified),
    ("refused", CanonicalStatus::Rejected),
];

/// Placeholder logged in the `raw` field when a record has no status.
pub const ABSENT_STATUS: &str = "<absent>";

// ─── Matching Policy ─────────────────────────────────────────────────

/// Input normalisation applied before lookup. Both options default to off,
/// which gives exact, case-sensitive matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchPolicy {
    /// Strip leading and trailing whitespace.
    pub trim_whitespace: bool,
    /// Compare keys in lowercase.
    pub case_insensitive: bool,
}

impl MatchPolicy {
    fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        let trimmed = if self.trim_whitespace { raw.trim() } else { raw };
        if self.case_insensitive {
            Cow::Owned(trimmed.to_lowercase())
        } else {
            Cow::Borrowed(trimmed)
        }
    }
}

// ─── Resolution ──────────────────────────────────────────────────────

/// Outcome of resolving a raw status.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The raw value maps to a canonical status.
    Recognized(CanonicalStatus),
    /// The raw value is absent or not in the table. Carries it unchanged.
    Unrecognized {
        /// The raw value as received.
        raw: Option<String>,
    },
}

impl Resolution {
    /// The canonical status, if resolution succeeded.
    pub fn canonical(&self) -> Option<CanonicalStatus> {
        match self {
            Self::Recognized(status) => Some(*status),
            Self::Unrecognized { .. } => None,
        }
    }

    /// Whether resolution succeeded.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }
}

impl From<CanonicalStatus> for Resolution {
    fn from(status: CanonicalStatus) -> Self {
        Self::Recognized(status)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recognized(status) => write!(f, "{status}"),
            Self::Unrecognized { raw: Some(raw) } => write!(f, "unrecognized({raw:?})"),
            Self::Unrecognized { raw: None } => f.write_str("unrecognized(absent)"),
        }
    }
}

// ─── Alias Table ─────────────────────────────────────────────────────

/// Immutable raw-string → canonical-status lookup.
///
/// Build once at startup with [`AliasTable::builtin()`] or
/// [`AliasTable::builder()`] and share by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, CanonicalStatus>,
    policy: MatchPolicy,
}

impl AliasTable {
    /// Canonical fixed points plus [`BUILTIN_LEGACY_ALIASES`], exact matching.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for status in CanonicalStatus::all() {
            entries.insert(status.as_str().to_string(), *status);
        }
        for (alias, status) in BUILTIN_LEGACY_ALIASES {
            entries.insert((*alias).to_string(), *status);
        }
        Self {
            entries,
            policy: MatchPolicy::default(),
        }
    }

    /// Start a table seeded with the built-in entries under `policy`.
    pub fn builder(policy: MatchPolicy) -> AliasTableBuilder {
        AliasTableBuilder::new(policy)
    }

    /// Look up a raw value without logging.
    pub fn lookup(&self, raw: &str) -> Option<CanonicalStatus> {
        self.entries.get(self.policy.normalize(raw).as_ref()).copied()
    }

    /// Resolve a raw value. Absent and unknown values come back as
    /// [`Resolution::Unrecognized`] and emit a warning.
    pub fn resolve(&self, raw: Option<&str>) -> Resolution {
        let resolution = self.classify(raw);
        if !resolution.is_recognized() {
            tracing::warn!(
                raw = raw.unwrap_or(ABSENT_STATUS),
                absent = raw.is_none(),
                "unrecognized content status"
            );
        }
        resolution
    }

    /// Same result as [`resolve`](Self::resolve) without the warning.
    /// Bulk callers use this and report unrecognized values once per batch.
    pub fn classify(&self, raw: Option<&str>) -> Resolution {
        match raw.and_then(|r| self.lookup(r)) {
            Some(status) => Resolution::Recognized(status),
            None => Resolution::Unrecognized {
                raw: raw.map(str::to_string),
            },
        }
    }

    /// Resolve a raw value, failing on a miss.
    pub fn resolve_strict(&self, raw: Option<&str>) -> Result<CanonicalStatus, StatusError> {
        match self.resolve(raw) {
            Resolution::Recognized(status) => Ok(status),
            Resolution::Unrecognized { raw } => Err(StatusError::UnrecognizedStatus { raw }),
        }
    }

    /// Resolve a raw value, substituting `default` on a miss.
    pub fn resolve_or(&self, raw: Option<&str>, default: CanonicalStatus) -> CanonicalStatus {
        self.resolve(raw).canonical().unwrap_or(default)
    }

    /// All entries, fixed points included, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, CanonicalStatus)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries whose key is not itself a canonical name.
    pub fn legacy_aliases(&self) -> impl Iterator<Item = (&str, CanonicalStatus)> + '_ {
        self.entries()
            .filter(|(k, _)| k.parse::<CanonicalStatus>().is_err())
    }

    /// Number of entries, fixed points included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the fixed points are present in every table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The normalisation applied to lookups.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ─── Builder ─────────────────────────────────────────────────────────

/// Accumulates deployment-specific aliases on top of the built-in table.
#[derive(Debug, Clone)]
pub struct AliasTableBuilder {
    entries: BTreeMap<String, CanonicalStatus>,
    policy: MatchPolicy,
}

impl AliasTableBuilder {
    fn new(policy: MatchPolicy) -> Self {
        let mut entries = BTreeMap::new();
        for (key, status) in AliasTable::builtin().entries {
            entries.insert(policy.normalize(&key).into_owned(), status);
        }
        Self { entries, policy }
    }

    /// Add an alias. Re-adding an identical mapping is a no-op.
    ///
    /// # Errors
    ///
    /// - [`StatusError::Config`] if the key is empty after normalisation.
    /// - [`StatusError::AliasConflict`] if the key already resolves to a
    ///   different status.
    pub fn alias(mut self, raw: &str, status: CanonicalStatus) -> Result<Self, StatusError> {
        let key = self.policy.normalize(raw).into_owned();
        if key.trim().is_empty() {
            return Err(StatusError::Config(format!(
                "alias key {raw:?} is blank"
            )));
        }
        match self.entries.get(&key) {
            Some(existing) if *existing != status => {
                return Err(StatusError::AliasConflict {
                    alias: key,
                    existing: existing.to_string(),
                    requested: status.to_string(),
                });
            }
            Some(_) => {}
            None => {
                self.entries.insert(key, status);
            }
        }
        Ok(self)
    }

    /// Freeze the table.
    pub fn build(self) -> AliasTable {
        AliasTable {
            entries: self.entries,
            policy: self.policy,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
