//! # hedu-core: Foundational Types for the Content Platform
//!
//! Leaf crate of the workspace. Defines the record shapes that every other
//! crate reads: content identifiers, content kinds, UTC timestamps, and the
//! exported content record itself.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `ContentId` wraps a UUID so a content id can
//!    never be confused with an arbitrary string.
//!
//! 2. **Raw status stays raw.** `ContentRecord::status` is kept as the
//!    string the storage layer persisted, including historical values.
//!    Classification belongs to `hedu-status`; this crate never interprets it.
//!
//! 3. **UTC-only timestamps.** `Timestamp` normalises every input to UTC
//!    with seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hedu-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod content;
pub mod error;
pub mod identity;
pub mod temporal;

pub use content::{ContentKind, ContentRecord, CONTENT_KIND_COUNT};
pub use error::HeduError;
pub use identity::ContentId;
pub use temporal::Timestamp;
