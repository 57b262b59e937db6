//! Resource attachment model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Permission;

/// A catalog resource attached to an entity, with the permissions granted on it
///
/// A resource name appears at most once per entity. The set representation
/// makes duplicate grants impossible and keeps serialization order stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceAttachment {
    /// Resource name, drawn from the editor's fixed catalog
    pub resource: String,
    /// Permissions currently granted on this resource
    pub permissions: BTreeSet<Permission>,
}

impl ResourceAttachment {
    /// New attachment with no permissions granted
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            permissions: BTreeSet::new(),
        }
    }

    /// New attachment with an initial set of granted permissions
    pub fn with_permissions(
        resource: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            resource: resource.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Check if a permission is currently granted
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Flip one permission; returns whether it is granted after the call
    pub fn toggle(&mut self, permission: Permission) -> bool {
        if self.permissions.remove(&permission) {
            false
        } else {
            self.permissions.insert(permission);
            true
        }
    }
}
