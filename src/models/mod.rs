//! Data models for the photo booth API.
//!
//! Nothing here is persisted; values serialize straight to JSON via `serde`.

pub mod photo;
