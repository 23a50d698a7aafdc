//! # Content Identifiers
//!
//! Newtype wrapper for content record identifiers. The storage layer
//! assigns UUIDs to every upload (document, video, model); this type keeps
//! them distinct from free-form strings such as titles or raw statuses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HeduError;

/// Unique identifier for a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub Uuid);

impl ContentId {
    /// Generate a new random content identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "content:{}", self.0)
    }
}

impl FromStr for ContentId {
    type Err = HeduError;

    /// Parse either a bare UUID or the `content:<uuid>` display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("content:").unwrap_or(s);
        Uuid::parse_str(bare)
            .map(Self)
            .map_err(|e| HeduError::Validation(format!("invalid content id {s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ContentId::new(), ContentId::new());
    }

    #[test]
    fn test_display_has_namespace_prefix() {
        let id = ContentId::new();
        assert_eq!(id.to_string(), format!("content:{}", id.as_uuid()));
    }

    #[test]
    fn test_parse_display_form_and_bare_uuid() {
        let id = ContentId::new();
        let from_display: ContentId = id.to_string().parse().unwrap();
        let from_bare: ContentId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(from_display, id);
        assert_eq!(from_bare, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<ContentId>().is_err());
        assert!("content:".parse::<ContentId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = ContentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
