//! # Transition Policy
//!
//! Moderation is an override, not a pipeline: a moderator may move an item
//! from any canonical status to any other one. A status never lists itself.
//! When the current status is unrecognized the engine cannot assume a safe
//! starting point, so all three canonical statuses are offered.
//!
//! | Current | Allowed, in display order |
//! |---------|---------------------------|
//! | pending | verified, rejected |
//! | rejected | pending, verified |
//! | verified | pending, rejected |
//! | unrecognized | pending, rejected, verified |
//!
//! The engine only advises. [`StatusChange`] describes a legal move for
//! the storage layer to apply; nothing here writes to a content record.

use serde::{Deserialize, Serialize};

use hedu_core::{ContentId, Timestamp};

use crate::alias::Resolution;
use crate::error::StatusError;
use crate::taxonomy::CanonicalStatus;

const FROM_PENDING: &[CanonicalStatus] = &[CanonicalStatus::Verified, CanonicalStatus::Rejected];
const FROM_REJECTED: &[CanonicalStatus] = &[CanonicalStatus::Pending, CanonicalStatus::Verified];
const FROM_VERIFIED: &[CanonicalStatus] = &[CanonicalStatus::Pending, CanonicalStatus::Rejected];
const FROM_UNRECOGNIZED: &[CanonicalStatus] = &[
    CanonicalStatus::Pending,
    CanonicalStatus::Rejected,
    CanonicalStatus::Verified,
];

/// Statuses reachable from a canonical status.
pub fn next_states_from(status: CanonicalStatus) -> &'static [CanonicalStatus] {
    match status {
        CanonicalStatus::Pending => FROM_PENDING,
        CanonicalStatus::Rejected => FROM_REJECTED,
        CanonicalStatus::Verified => FROM_VERIFIED,
    }
}

/// Statuses reachable from a resolved status. Never empty.
pub fn allowed_next_states(current: &Resolution) -> &'static [CanonicalStatus] {
    match current {
        Resolution::Recognized(status) => next_states_from(*status),
        Resolution::Unrecognized { .. } => FROM_UNRECOGNIZED,
    }
}

/// Check that `target` is reachable from `current`.
pub fn check_transition(current: &Resolution, target: CanonicalStatus) -> Result<(), StatusError> {
    if allowed_next_states(current).contains(&target) {
        Ok(())
    } else {
        Err(StatusError::InvalidTransition {
            from: current.to_string(),
            to: target.to_string(),
        })
    }
}

// ─── Moderation Evidence ─────────────────────────────────────────────

/// Who is moving an item and why.
#[derive(Debug, Clone)]
pub struct ModerationEvidence {
    /// Reason shown to the content owner.
    pub reason: String,
    /// Moderator account, if known.
    pub moderator: Option<String>,
}

/// A validated status change, ready for the storage layer to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// The item being moderated.
    pub content_id: ContentId,
    /// Raw status before the change, exactly as stored.
    pub from_raw: Option<String>,
    /// Resolved status before the change. `None` when it was unrecognized.
    pub from: Option<CanonicalStatus>,
    /// Status to write.
    pub to: CanonicalStatus,
    /// Moderator account, if known.
    pub moderator: Option<String>,
    /// Reason for the change.
    pub reason: String,
    /// When the change was proposed.
    pub timestamp: Timestamp,
}

impl StatusChange {
    /// Build a change after checking it against the policy.
    pub fn propose(
        content_id: ContentId,
        from_raw: Option<&str>,
        current: &Resolution,
        to: CanonicalStatus,
        evidence: ModerationEvidence,
    ) -> Result<Self, StatusError> {
        check_transition(current, to)?;
        Ok(Self {
            content_id,
            from_raw: from_raw.map(str::to_string),
            from: current.canonical(),
            to,
            moderator: evidence.moderator,
            reason: evidence.reason,
            timestamp: Timestamp::now(),
        })
    }

    /// The string the storage layer should persist. Always canonical, so
    /// applying a change also retires any legacy alias on the record.
    pub fn stored_value(&self) -> &'static str {
        self.to.as_str()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
