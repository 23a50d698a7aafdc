//! # Presentation Adapter
//!
//! Turns a resolution into what a badge needs. This is the only place that
//! produces a visual for a non-canonical status: an unrecognized value gets
//! the neutral [`UNKNOWN_DESCRIPTOR`](crate::taxonomy::UNKNOWN_DESCRIPTOR)
//! and shows its raw text as the label, so the list still renders.

use serde::Serialize;

use crate::alias::Resolution;
use crate::taxonomy::{CanonicalStatus, Severity, StatusDescriptor, StatusTaxonomy};

/// A status ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DescribedStatus<'a> {
    /// Resolved to a canonical status.
    Canonical {
        status: CanonicalStatus,
        descriptor: &'a StatusDescriptor,
    },
    /// Not resolvable; rendered with the neutral descriptor.
    Unknown {
        raw: Option<String>,
        descriptor: &'static StatusDescriptor,
    },
}

impl<'a> DescribedStatus<'a> {
    /// Describe a resolution against `taxonomy`. Never fails.
    pub fn new(taxonomy: &'a StatusTaxonomy, resolution: Resolution) -> Self {
        match resolution {
            Resolution::Recognized(status) => Self::Canonical {
                status,
                descriptor: taxonomy.describe(status),
            },
            Resolution::Unrecognized { raw } => Self::Unknown {
                raw,
                descriptor: taxonomy.unknown(),
            },
        }
    }

    pub fn descriptor(&self) -> &StatusDescriptor {
        match self {
            Self::Canonical { descriptor, .. } => *descriptor,
            Self::Unknown { descriptor, .. } => *descriptor,
        }
    }

    /// Badge text. Unknown values show their trimmed raw text, or the
    /// descriptor label when the raw value is absent or blank.
    pub fn label(&self) -> &str {
        match self {
            Self::Canonical { descriptor, .. } => descriptor.label,
            Self::Unknown { raw, descriptor } => match raw.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => text,
                _ => descriptor.label,
            },
        }
    }

    pub fn severity(&self) -> Severity {
        self.descriptor().severity
    }

    pub fn status(&self) -> Option<CanonicalStatus> {
        match self {
            Self::Canonical { status, .. } => Some(*status),
            Self::Unknown { .. } => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}
