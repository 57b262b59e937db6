//! Entity model (group roles and security rules)

use serde::{Deserialize, Serialize};

use super::ResourceAttachment;

/// Which flavor of entity an editor manages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// Group role; carries a description
    Role,
    /// Security rule; no description
    Rule,
}

impl EntityKind {
    /// Whether entities of this kind carry a description field
    pub fn has_description(&self) -> bool {
        matches!(self, Self::Role)
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Rule => "rule",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role or rule record being managed by an editor
///
/// Names carry no uniqueness constraint; two entities may share a name or be
/// empty. Attachment order is insertion order and only matters for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub id: i64,
    pub name: String,
    /// Present only for the role kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<ResourceAttachment>,
}

impl Entity {
    /// New entity with no description and no resources
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            resources: Vec::new(),
        }
    }

    /// Set the description (builder style, used by seed data)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the resource list (builder style, used by seed data)
    pub fn with_resources(mut self, resources: Vec<ResourceAttachment>) -> Self {
        self.resources = resources;
        self
    }

    /// Position of an attachment by resource name
    pub fn resource_index(&self, resource: &str) -> Option<usize> {
        self.resources.iter().position(|r| r.resource == resource)
    }

    /// Whether a resource is already attached
    pub fn has_resource(&self, resource: &str) -> bool {
        self.resource_index(resource).is_some()
    }
}
