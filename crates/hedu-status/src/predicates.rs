//! # Status Predicates
//!
//! Boolean queries used by list filtering and access-control gates.
//! All of them fail closed: an unrecognized status answers `false` to
//! every question, so content of unknown standing is never public.

use serde::Serialize;

use crate::alias::Resolution;
use crate::taxonomy::CanonicalStatus;

/// Visible to the public. True only for `verified`.
pub fn is_public(resolution: &Resolution) -> bool {
    matches!(resolution, Resolution::Recognized(CanonicalStatus::Verified))
}

/// Awaiting moderation.
pub fn is_pending(resolution: &Resolution) -> bool {
    matches!(resolution, Resolution::Recognized(CanonicalStatus::Pending))
}

/// Declined by a moderator.
pub fn is_rejected(resolution: &Resolution) -> bool {
    matches!(resolution, Resolution::Recognized(CanonicalStatus::Rejected))
}

/// Same as [`is_public`]; reads better next to moderation code.
pub fn is_verified(resolution: &Resolution) -> bool {
    is_public(resolution)
}

/// All four predicates evaluated at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusFlags {
    pub public: bool,
    pub pending: bool,
    pub rejected: bool,
    pub verified: bool,
}

impl StatusFlags {
    pub fn of(resolution: &Resolution) -> Self {
        Self {
            public: is_public(resolution),
            pending: is_pending(resolution),
            rejected: is_rejected(resolution),
            verified: is_verified(resolution),
        }
    }

    /// True when no predicate holds, which happens only for unrecognized input.
    pub fn none(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown(raw: Option<&str>) -> Resolution {
        Resolution::Unrecognized {
            raw: raw.map(str::to_string),
        }
    }

    #[test]
    fn test_verified_is_public() {
        let r = Resolution::Recognized(CanonicalStatus::Verified);
        assert!(is_public(&r));
        assert!(is_verified(&r));
        assert!(!is_pending(&r));
        assert!(!is_rejected(&r));
    }

    #[test]
    fn test_pending_and_rejected_are_not_public() {
        for status in [CanonicalStatus::Pending, CanonicalStatus::Rejected] {
            assert!(!is_public(&Resolution::Recognized(status)));
        }
        assert!(is_pending(&Resolution::Recognized(CanonicalStatus::Pending)));
        assert!(is_rejected(&Resolution::Recognized(CanonicalStatus::Rejected)));
    }

    #[test]
    fn test_unrecognized_fails_closed() {
        for r in [unknown(Some("archived")), unknown(Some("")), unknown(None)] {
            let flags = StatusFlags::of(&r);
            assert!(flags.none(), "{r} should match no predicate");
        }
    }

    #[test]
    fn test_exactly_one_state_predicate_for_canonical() {
        for status in CanonicalStatus::all() {
            let flags = StatusFlags::of(&Resolution::Recognized(*status));
            let held = [flags.pending, flags.rejected, flags.verified]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(held, 1);
            assert_eq!(flags.public, flags.verified);
        }
    }
}
