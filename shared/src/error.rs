//! Unified error type for editor operations
//!
//! Every failure here is a precondition violation by the calling surface
//! (selecting an id that does not exist, attaching a duplicate resource).
//! Operations fail fast with a typed error instead of panicking; there is
//! no recoverable-error channel to an end user.

use thiserror::Error;

use crate::models::EntityKind;

/// Editor operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// No entity with the given identifier exists in the collection
    #[error("Entity not found: {0}")]
    EntityNotFound(i64),

    /// The operation needs a draft, but nothing is selected
    #[error("No entity selected")]
    NoSelection,

    /// The resource is already attached to the draft
    #[error("Resource already attached: {0}")]
    DuplicateResource(String),

    /// The resource name is not part of the editor's catalog
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Attachment index past the end of the draft's resource list
    #[error("Attachment index {index} out of range (len {len})")]
    AttachmentOutOfRange { index: usize, len: usize },

    /// The entity kind carries no description field
    #[error("{0} entities have no description")]
    DescriptionUnsupported(EntityKind),
}

impl EditorError {
    /// Create a DuplicateResource error
    pub fn duplicate_resource(resource: impl Into<String>) -> Self {
        Self::DuplicateResource(resource.into())
    }

    /// Create an UnknownResource error
    pub fn unknown_resource(resource: impl Into<String>) -> Self {
        Self::UnknownResource(resource.into())
    }
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
