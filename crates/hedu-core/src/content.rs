//! # Content Records
//!
//! The shape of a user-submitted content item as the storage layer exports
//! it. The `status` field is deliberately an untyped `Option<String>`:
//! stored records predate the three-state moderation model and may hold
//! historical values, or nothing at all.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HeduError;
use crate::identity::ContentId;
use crate::temporal::Timestamp;

/// Kinds of content the dashboard accepts for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// PDF or office document.
    Document,
    /// Video lecture or clip.
    Video,
    /// Interactive 3D anatomy model.
    Model,
    /// Still image or illustration.
    Image,
}

/// Total number of content kinds.
pub const CONTENT_KIND_COUNT: usize = 4;

impl ContentKind {
    /// Returns all content kinds in display order.
    pub fn all_kinds() -> &'static [ContentKind] {
        &[Self::Document, Self::Video, Self::Model, Self::Image]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Video => "video",
            Self::Model => "model",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = HeduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(Self::Document),
            "video" => Ok(Self::Video),
            "model" => Ok(Self::Model),
            "image" => Ok(Self::Image),
            other => Err(HeduError::Validation(format!(
                "unknown content kind: {other:?}"
            ))),
        }
    }
}

/// A content item as exported from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Storage identifier.
    pub id: ContentId,
    /// What was uploaded.
    pub kind: ContentKind,
    /// Title shown in listings.
    pub title: String,
    /// Raw moderation status exactly as persisted. `None` when the field
    /// is missing or `null` in the source record.
    #[serde(default)]
    pub status: Option<String>,
    /// When the item was submitted, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<Timestamp>,
}

impl ContentRecord {
    /// Status written on every new submission.
    pub const INITIAL_STATUS: &'static str = "pending";

    /// Create a freshly submitted record in the initial status.
    pub fn new_submission(kind: ContentKind, title: impl Into<String>) -> Self {
        Self {
            id: ContentId::new(),
            kind,
            title: title.into(),
            status: Some(Self::INITIAL_STATUS.to_string()),
            submitted_at: Some(Timestamp::now()),
        }
    }

    /// The raw status as a borrowed string, if any.
    pub fn raw_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Decode a JSON array of records, as produced by a storage export.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, HeduError> {
        Ok(serde_json::from_str(json)?)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any status string survives a JSON round trip untouched.
        #[test]
        fn raw_status_is_preserved(status in proptest::option::of(".{0,40}")) {
            let rec = ContentRecord {
                id: ContentId::new(),
                kind: ContentKind::Document,
                title: "t".to_string(),
                status: status.clone(),
                submitted_at: None,
            };
            let json = serde_json::to_string(&rec).unwrap();
            let parsed: ContentRecord = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed.status, status);
        }
    }
}
