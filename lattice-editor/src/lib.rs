//! Lattice editor core
//!
//! The logical core of the "Group Roles" and "Security Rules" screens: one
//! parametrized state machine ([`MatrixEditor`]) over an entity collection,
//! a selection pointer, and an uncommitted draft, plus the static catalogs
//! ([`EditorProfile`]) both screens render from.
//!
//! Rendering is out of scope. A surface reads state through the editor's
//! accessors and calls its operations in response to user gestures; all
//! state is in-memory and resets when the view is torn down.

pub mod catalog;
pub mod editor;
pub mod seed;

// Re-exports
pub use catalog::{EditorProfile, ProfileError, ResourceInfo};
pub use editor::MatrixEditor;
pub use shared::error::{EditorError, EditorResult};
pub use shared::models::{Entity, EntityKind, Permission, ResourceAttachment};
