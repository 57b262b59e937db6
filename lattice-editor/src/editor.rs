//! Matrix editor state machine
//!
//! Owns the entity collection, the current selection, and the uncommitted
//! draft for one editor screen. Every operation runs synchronously in
//! response to one user gesture; edits land on the draft and reach the
//! collection only through [`MatrixEditor::save_draft`]. Deletion goes
//! through a request/confirm latch so the surface can show a confirmation
//! prompt before anything is removed.

use shared::error::{EditorError, EditorResult};
use shared::models::{Entity, Permission, ResourceAttachment};
use tracing::debug;

use crate::catalog::{EditorProfile, ResourceInfo};

/// Identifier assigned to the first entity created in an empty collection
const FIRST_ENTITY_ID: i64 = 1;

/// In-memory editor over one screen's permission matrix
#[derive(Debug, Clone)]
pub struct MatrixEditor {
    profile: EditorProfile,
    /// Iteration order is insertion order; selection fallback and
    /// save-in-place depend on it
    entities: Vec<Entity>,
    /// `None` only while the collection is empty
    selection: Option<i64>,
    /// Deep copy of the selected entity; absorbs edits until saved
    draft: Option<Entity>,
    /// Deletion confirmation latch
    pending_delete: Option<i64>,
    /// Whether the add-resource picker is open
    picker_open: bool,
}

impl MatrixEditor {
    /// Create an editor with an empty collection
    pub fn new(profile: EditorProfile) -> Self {
        Self {
            profile,
            entities: Vec::new(),
            selection: None,
            draft: None,
            pending_delete: None,
            picker_open: false,
        }
    }

    /// Create an editor seeded with entities; the first one is selected
    pub fn with_entities(profile: EditorProfile, entities: Vec<Entity>) -> Self {
        let mut editor = Self::new(profile);
        editor.entities = entities;
        if let Some(first) = editor.entities.first() {
            editor.selection = Some(first.id);
            editor.draft = Some(first.clone());
        }
        editor
    }

    // =========================================================================
    // Accessors (for the rendering surface)
    // =========================================================================

    pub fn profile(&self) -> &EditorProfile {
        &self.profile
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up a stored entity by id
    pub fn entity(&self, id: i64) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn selection(&self) -> Option<i64> {
        self.selection
    }

    pub fn draft(&self) -> Option<&Entity> {
        self.draft.as_ref()
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    // =========================================================================
    // Selection & draft
    // =========================================================================

    /// Select an entity and open a fresh draft of it
    ///
    /// Unsaved edits on the previous draft are discarded silently.
    pub fn select_entity(&mut self, id: i64) -> EditorResult<()> {
        let entity = self
            .entity(id)
            .cloned()
            .ok_or(EditorError::EntityNotFound(id))?;
        self.selection = Some(id);
        self.draft = Some(entity);
        self.picker_open = false;
        debug!(id, "Entity selected");
        Ok(())
    }

    /// Commit the draft back into the collection, in place
    ///
    /// The stored entity keeps its position in iteration order.
    pub fn save_draft(&mut self) -> EditorResult<()> {
        let draft = self.draft.as_ref().ok_or(EditorError::NoSelection)?;
        let slot = self
            .entities
            .iter_mut()
            .find(|e| e.id == draft.id)
            .ok_or(EditorError::EntityNotFound(draft.id))?;
        *slot = draft.clone();
        debug!(id = draft.id, "Draft saved");
        Ok(())
    }

    /// Append a new entity, select it, and open its draft
    ///
    /// The identifier is strictly greater than every existing one, or
    /// `FIRST_ENTITY_ID` for an empty collection. Returns the new id.
    pub fn add_entity(&mut self) -> i64 {
        let id = self.next_id();
        let mut entity = Entity::new(id, format!("New {}", id));
        if self.profile.kind.has_description() {
            entity.description = Some(String::new());
        }
        self.entities.push(entity.clone());
        self.selection = Some(id);
        self.draft = Some(entity);
        self.picker_open = false;
        debug!(id, total = self.entities.len(), "Entity added");
        id
    }

    /// Latch an entity for deletion; the collection is untouched until confirmed
    pub fn request_delete(&mut self, id: i64) -> EditorResult<()> {
        if self.entity(id).is_none() {
            return Err(EditorError::EntityNotFound(id));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    /// Delete the latched entity, if any, and clear the latch
    ///
    /// If the deleted entity was selected, selection falls back to the first
    /// remaining entity, or to no selection when the collection empties.
    /// Calling with nothing latched only clears the latch.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.entities.retain(|e| e.id != id);
        if self.selection == Some(id) {
            match self.entities.first() {
                Some(first) => {
                    self.selection = Some(first.id);
                    self.draft = Some(first.clone());
                }
                None => {
                    self.selection = None;
                    self.draft = None;
                }
            }
            self.picker_open = false;
        }
        debug!(id, remaining = self.entities.len(), "Entity deleted");
    }

    /// Drop the deletion latch without touching the collection
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // =========================================================================
    // Draft field edits
    // =========================================================================

    /// Rename the draft (no uniqueness constraint)
    pub fn set_draft_name(&mut self, name: impl Into<String>) -> EditorResult<()> {
        let draft = self.draft.as_mut().ok_or(EditorError::NoSelection)?;
        draft.name = name.into();
        Ok(())
    }

    /// Update the draft description (role-kind editors only)
    pub fn set_draft_description(&mut self, description: impl Into<String>) -> EditorResult<()> {
        if !self.profile.kind.has_description() {
            return Err(EditorError::DescriptionUnsupported(self.profile.kind));
        }
        let draft = self.draft.as_mut().ok_or(EditorError::NoSelection)?;
        draft.description = Some(description.into());
        Ok(())
    }

    // =========================================================================
    // Resource / permission matrix
    // =========================================================================

    /// Attach a catalog resource to the draft with no permissions granted
    ///
    /// Prior attachment order is preserved; the new attachment goes last.
    pub fn attach_resource(&mut self, resource: &str) -> EditorResult<()> {
        if !self.profile.has_resource(resource) {
            return Err(EditorError::unknown_resource(resource));
        }
        let draft = self.draft.as_mut().ok_or(EditorError::NoSelection)?;
        if draft.has_resource(resource) {
            return Err(EditorError::duplicate_resource(resource));
        }
        draft.resources.push(ResourceAttachment::new(resource));
        debug!(id = draft.id, resource, "Resource attached");
        Ok(())
    }

    /// Detach the attachment at `index`, returning it
    ///
    /// Later attachments shift down by one. The collection is untouched
    /// until the draft is saved.
    pub fn detach_resource(&mut self, index: usize) -> EditorResult<ResourceAttachment> {
        let draft = self.draft.as_mut().ok_or(EditorError::NoSelection)?;
        let len = draft.resources.len();
        if index >= len {
            return Err(EditorError::AttachmentOutOfRange { index, len });
        }
        let removed = draft.resources.remove(index);
        debug!(id = draft.id, resource = %removed.resource, "Resource detached");
        Ok(removed)
    }

    /// Flip one permission on the attachment at `index`
    ///
    /// Returns whether the permission is granted after the call.
    pub fn toggle_permission(&mut self, index: usize, permission: Permission) -> EditorResult<bool> {
        let draft = self.draft.as_mut().ok_or(EditorError::NoSelection)?;
        let len = draft.resources.len();
        let attachment = draft
            .resources
            .get_mut(index)
            .ok_or(EditorError::AttachmentOutOfRange { index, len })?;
        let granted = attachment.toggle(permission);
        debug!(
            id = draft.id,
            resource = %attachment.resource,
            permission = %permission,
            granted,
            "Permission toggled"
        );
        Ok(granted)
    }

    // =========================================================================
    // Add-resource picker
    // =========================================================================

    pub fn open_resource_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_resource_picker(&mut self) {
        self.picker_open = false;
    }

    /// Catalog entries not yet attached to the draft, in catalog order
    ///
    /// This is the candidate list the picker renders; empty when nothing is
    /// selected.
    pub fn available_resources(&self) -> Vec<&ResourceInfo> {
        let Some(draft) = &self.draft else {
            return Vec::new();
        };
        self.profile
            .resources
            .iter()
            .filter(|r| !draft.has_resource(&r.name))
            .collect()
    }

    /// Next free identifier: strictly greater than every existing one
    fn next_id(&self) -> i64 {
        self.entities
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(FIRST_ENTITY_ID, |max| max + 1)
    }
}
