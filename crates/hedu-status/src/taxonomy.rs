//! # Status Taxonomy
//!
//! The closed set of moderation states every piece of business logic is
//! written against, and the descriptor table used to render them.
//!
//! ## States
//!
//! ```text
//! Pending  ──▶ Verified | Rejected
//! Rejected ──▶ Pending  | Verified
//! Verified ──▶ Pending  | Rejected
//! ```
//!
//! Every state can be moved to every other state by a moderator; see
//! [`crate::transition`].
//!
//! ## Invariant
//!
//! [`StatusTaxonomy`] holds exactly one [`StatusDescriptor`] per
//! [`CanonicalStatus`]. The table is an array indexed by an exhaustive
//! match, so a missing entry is a compile error rather than a lookup miss.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

// ─── Canonical Status ────────────────────────────────────────────────

/// The authoritative moderation state of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    /// Submitted and awaiting moderation. Initial state for new uploads.
    Pending,
    /// Declined by a moderator. Hidden from public listings.
    Rejected,
    /// Approved by a moderator. The only publicly visible state.
    Verified,
}

/// Number of canonical statuses.
pub const CANONICAL_STATUS_COUNT: usize = 3;

impl CanonicalStatus {
    /// All canonical statuses in display order.
    pub fn all() -> &'static [CanonicalStatus] {
        &[Self::Pending, Self::Rejected, Self::Verified]
    }

    /// The persisted string form. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Verified => "verified",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::Rejected => 1,
            Self::Verified => 2,
        }
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalStatus {
    type Err = StatusError;

    /// Parse a canonical status name only. Legacy aliases go through
    /// [`crate::AliasTable`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "rejected" => Ok(Self::Rejected),
            "verified" => Ok(Self::Verified),
            other => Err(StatusError::UnrecognizedStatus {
                raw: Some(other.to_string()),
            }),
        }
    }
}

// ─── Descriptors ─────────────────────────────────────────────────────

/// Visual urgency of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Awaiting action; no judgement yet.
    Informational,
    /// Declined or otherwise adverse.
    Negative,
    /// Approved.
    Positive,
    /// No classification available. Used only by the unknown descriptor.
    Neutral,
}

impl Severity {
    /// Colour tag understood by the badge primitive.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Informational => "gold",
            Self::Negative => "red",
            Self::Positive => "green",
            Self::Neutral => "default",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Informational => "informational",
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Rendering metadata for a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    /// Human-readable name.
    pub label: &'static str,
    /// Visual classification.
    pub severity: Severity,
    /// Icon name for the badge.
    pub icon: &'static str,
    /// What the state means for the content owner.
    pub description: &'static str,
}

/// Descriptor rendered for any status the resolver did not recognise.
pub static UNKNOWN_DESCRIPTOR: StatusDescriptor = StatusDescriptor {
    label: "Unknown",
    severity: Severity::Neutral,
    icon: "question-circle",
    description: "This status is not recognised. The item is kept out of public listings until a moderator sets a valid status.",
};

/// The per-status descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTaxonomy {
    descriptors: [StatusDescriptor; CANONICAL_STATUS_COUNT],
}

impl StatusTaxonomy {
    /// The standard dashboard taxonomy.
    pub fn standard() -> Self {
        Self {
            descriptors: [
                StatusDescriptor {
                    label: "Pending",
                    severity: Severity::Informational,
                    icon: "clock-circle",
                    description: "Awaiting review by a moderator. Not visible to the public yet.",
                },
                StatusDescriptor {
                    label: "Rejected",
                    severity: Severity::Negative,
                    icon: "close-circle",
                    description: "A moderator declined this submission. It is hidden from public listings.",
                },
                StatusDescriptor {
                    label: "Verified",
                    severity: Severity::Positive,
                    icon: "check-circle",
                    description: "Approved by a moderator and visible in public listings.",
                },
            ],
        }
    }

    /// Descriptor for a canonical status. Total.
    pub fn describe(&self, status: CanonicalStatus) -> &StatusDescriptor {
        &self.descriptors[status.index()]
    }

    /// Descriptor used when resolution fails.
    pub fn unknown(&self) -> &'static StatusDescriptor {
        &UNKNOWN_DESCRIPTOR
    }

    /// Iterate `(status, descriptor)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalStatus, &StatusDescriptor)> + '_ {
        CanonicalStatus::all()
            .iter()
            .map(move |s| (*s, self.describe(*s)))
    }
}

impl Default for StatusTaxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_count_and_order() {
        assert_eq!(CanonicalStatus::all().len(), CANONICAL_STATUS_COUNT);
        assert_eq!(
            CanonicalStatus::all(),
            &[
                CanonicalStatus::Pending,
                CanonicalStatus::Rejected,
                CanonicalStatus::Verified
            ]
        );
    }

    #[test]
    fn test_index_is_a_bijection() {
        let seen: HashSet<usize> = CanonicalStatus::all().iter().map(|s| s.index()).collect();
        assert_eq!(seen.len(), CANONICAL_STATUS_COUNT);
        assert!(seen.iter().all(|i| *i < CANONICAL_STATUS_COUNT));
    }

    #[test]
    fn test_as_str_parse_roundtrip() {
        for status in CanonicalStatus::all() {
            assert_eq!(status.as_str().parse::<CanonicalStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn test_from_str_rejects_aliases_and_case() {
        assert!("approved".parse::<CanonicalStatus>().is_err());
        assert!("Verified".parse::<CanonicalStatus>().is_err());
        assert!("".parse::<CanonicalStatus>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for status in CanonicalStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    // ── Descriptor table ─────────────────────────────────────────────

    #[test]
    fn test_every_status_has_a_distinct_descriptor() {
        let taxonomy = StatusTaxonomy::standard();
        let labels: HashSet<&str> = taxonomy.iter().map(|(_, d)| d.label).collect();
        assert_eq!(labels.len(), CANONICAL_STATUS_COUNT);
    }

    #[test]
    fn test_descriptor_labels_match_status() {
        let taxonomy = StatusTaxonomy::standard();
        for (status, descriptor) in taxonomy.iter() {
            assert_eq!(descriptor.label.to_lowercase(), status.as_str());
        }
    }

    #[test]
    fn test_severities() {
        let taxonomy = StatusTaxonomy::standard();
        assert_eq!(
            taxonomy.describe(CanonicalStatus::Pending).severity,
            Severity::Informational
        );
        assert_eq!(
            taxonomy.describe(CanonicalStatus::Rejected).severity,
            Severity::Negative
        );
        assert_eq!(
            taxonomy.describe(CanonicalStatus::Verified).severity,
            Severity::Positive
        );
    }

    #[test]
    fn test_unknown_descriptor_is_neutral_and_not_canonical() {
        let taxonomy = StatusTaxonomy::standard();
        let unknown = taxonomy.unknown();
        assert_eq!(unknown.severity, Severity::Neutral);
        assert!(taxonomy.iter().all(|(_, d)| d != unknown));
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Positive.color(), "green");
        assert_eq!(Severity::Negative.color(), "red");
        assert_eq!(Severity::Neutral.color(), "default");
    }
}
