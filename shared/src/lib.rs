//! Shared types for the Lattice editors
//!
//! Data models and error types used across the editor crates: the fixed
//! permission enumeration, resource attachments, the role/rule entity
//! shape, and the unified editor error.

pub mod error;
pub mod models;

// Re-exports
pub use error::{EditorError, EditorResult};
pub use serde::{Deserialize, Serialize};
