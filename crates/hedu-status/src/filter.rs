//! # List Filtering and Counts
//!
//! Listing pages and the dashboard counters both slice content by status.
//! Filters are evaluated on the resolution, so an unrecognized status
//! only ever matches [`StatusFilter::All`] and [`StatusFilter::Unrecognized`].

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use hedu_core::ContentRecord;

use crate::alias::Resolution;
use crate::error::StatusError;
use crate::predicates;
use crate::taxonomy::CanonicalStatus;

/// Anything carrying a raw moderation status.
pub trait HasRawStatus {
    fn raw_status(&self) -> Option<&str>;
}

impl HasRawStatus for ContentRecord {
    fn raw_status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl HasRawStatus for str {
    fn raw_status(&self) -> Option<&str> {
        Some(self)
    }
}

impl HasRawStatus for String {
    fn raw_status(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl HasRawStatus for Option<String> {
    fn raw_status(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl<T: HasRawStatus + ?Sized> HasRawStatus for &T {
    fn raw_status(&self) -> Option<&str> {
        (**self).raw_status()
    }
}

// ─── Filter ──────────────────────────────────────────────────────────

/// Which items a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    /// Public listings. Same set as `Verified`.
    Public,
    Pending,
    Rejected,
    Verified,
    /// Items needing attention because their status cannot be resolved.
    Unrecognized,
}

impl StatusFilter {
    pub fn all_filters() -> &'static [StatusFilter] {
        &[
            Self::All,
            Self::Public,
            Self::Pending,
            Self::Rejected,
            Self::Verified,
            Self::Unrecognized,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Verified => "verified",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub fn matches(&self, resolution: &Resolution) -> bool {
        match self {
            Self::All => true,
            Self::Public => predicates::is_public(resolution),
            Self::Pending => predicates::is_pending(resolution),
            Self::Rejected => predicates::is_rejected(resolution),
            Self::Verified => predicates::is_verified(resolution),
            Self::Unrecognized => !resolution.is_recognized(),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_filters()
            .iter()
            .find(|f| f.as_str() == s)
            .copied()
            .ok_or_else(|| StatusError::InvalidFilter(s.to_string()))
    }
}

// ─── Summary ─────────────────────────────────────────────────────────

/// Per-status counts over a set of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub pending: usize,
    pub rejected: usize,
    pub verified: usize,
    /// Items whose status did not resolve, absent ones included.
    pub unrecognized: usize,
    /// Items with no status field at all. Counted in `unrecognized` too.
    pub absent: usize,
    /// Distinct unrecognized raw values and how often each occurred.
    pub unrecognized_values: BTreeMap<String, usize>,
}

impl StatusSummary {
    /// Fold one resolution into the counts.
    pub fn record(&mut self, resolution: &Resolution) {
        self.total += 1;
        match resolution {
            Resolution::Recognized(CanonicalStatus::Pending) => self.pending += 1,
            Resolution::Recognized(CanonicalStatus::Rejected) => self.rejected += 1,
            Resolution::Recognized(CanonicalStatus::Verified) => self.verified += 1,
            Resolution::Unrecognized { raw } => {
                self.unrecognized += 1;
                match raw {
                    Some(raw) => *self.unrecognized_values.entry(raw.clone()).or_insert(0) += 1,
                    None => self.absent += 1,
                }
            }
        }
    }

    /// Count for one canonical status.
    pub fn count(&self, status: CanonicalStatus) -> usize {
        match status {
            CanonicalStatus::Pending => self.pending,
            CanonicalStatus::Rejected => self.rejected,
            CanonicalStatus::Verified => self.verified,
        }
    }

    /// Items shown in public listings.
    pub fn public(&self) -> usize {
        self.verified
    }

    /// True when every item resolved.
    pub fn is_clean(&self) -> bool {
        self.unrecognized == 0
    }

    /// One warning covering every unrecognized value counted so far.
    pub fn warn_unrecognized(&self) {
        let values: Vec<&str> = self.unrecognized_values.keys().map(String::as_str).collect();
        tracing::warn!(
            total = self.total,
            unrecognized = self.unrecognized,
            absent = self.absent,
            values = %values.join(", "),
            "unrecognized content statuses"
        );
    }
}
