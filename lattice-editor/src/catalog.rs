//! Editor profiles - static configuration for one editor screen
//!
//! A profile names the entity kind being edited (roles carry a description,
//! rules do not) and the fixed catalog of resources that can be attached.
//! The editor consumes a profile but never mutates it. The two built-in
//! screens ship as constructors; embedding hosts may also supply a profile
//! as JSON.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::models::EntityKind;
use thiserror::Error;

/// Profile loading/validation error
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate resource in catalog: {0}")]
    DuplicateResource(String),

    #[error("Profile has an empty resource catalog")]
    EmptyCatalog,
}

/// One resource in the fixed catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceInfo {
    pub name: String,
    /// Human-readable description shown by the add-resource picker
    pub description: String,
}

impl ResourceInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Static configuration for one editor screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorProfile {
    /// Which entity flavor this screen manages
    pub kind: EntityKind,
    /// Fixed resource catalog, in display order
    pub resources: Vec<ResourceInfo>,
}

impl EditorProfile {
    /// Profile for the "Group Roles" screen
    pub fn group_roles() -> Self {
        Self {
            kind: EntityKind::Role,
            resources: vec![
                ResourceInfo::new("Group Members", "Membership list of the group"),
                ResourceInfo::new("Group Calendar", "Shared calendar and events"),
                ResourceInfo::new("Discussions", "Discussion boards and threads"),
                ResourceInfo::new("Documents", "Shared document library"),
                ResourceInfo::new("Photo Gallery", "Uploaded photo albums"),
                ResourceInfo::new("Announcements", "Group-wide announcements"),
            ],
        }
    }

    /// Profile for the "Security Rules" screen
    pub fn security_rules() -> Self {
        Self {
            kind: EntityKind::Rule,
            resources: vec![
                ResourceInfo::new("User Accounts", "Account management pages"),
                ResourceInfo::new("Content Pages", "Public and member content"),
                ResourceInfo::new("Site Settings", "Global configuration panel"),
                ResourceInfo::new("Audit Log", "Recorded administrative activity"),
                ResourceInfo::new("API Tokens", "Issued integration tokens"),
            ],
        }
    }

    /// Load a profile from JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check catalog invariants: non-empty, unique resource names
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.resources.is_empty() {
            return Err(ProfileError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for info in &self.resources {
            if !seen.insert(info.name.as_str()) {
                return Err(ProfileError::DuplicateResource(info.name.clone()));
            }
        }
        Ok(())
    }

    /// Whether a resource name is part of the catalog
    pub fn has_resource(&self, name: &str) -> bool {
        self.resources.iter().any(|r| r.name == name)
    }

    /// Look up a catalog entry by name
    pub fn resource(&self, name: &str) -> Option<&ResourceInfo> {
        self.resources.iter().find(|r| r.name == name)
    }
}
