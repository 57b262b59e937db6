//! Permission enumeration
//!
//! The closed set of access levels that can be granted on a resource.
//! Users toggle these per attachment; no custom values can be introduced.

use serde::{Deserialize, Serialize};

/// Access level granted on a resource within one role or rule
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// View the resource
    Read,
    /// Create new items under the resource
    Add,
    /// Edit own items
    Edit,
    /// Modify any item, including other users' items
    Modify,
    /// Remove items
    Delete,
    /// Post replies and comments
    Post,
}

impl Permission {
    /// All permissions, in display order
    pub const ALL: [Permission; 6] = [
        Permission::Read,
        Permission::Add,
        Permission::Edit,
        Permission::Modify,
        Permission::Delete,
        Permission::Post,
    ];

    /// Parse permission from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" | "view" => Some(Self::Read),
            "add" | "create" => Some(Self::Add),
            "edit" => Some(Self::Edit),
            "modify" => Some(Self::Modify),
            "delete" | "remove" => Some(Self::Delete),
            "post" => Some(Self::Post),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Modify => "modify",
            Self::Delete => "delete",
            Self::Post => "post",
        }
    }

    /// Human-readable description for the rendering surface
    pub fn description(&self) -> &'static str {
        match self {
            Self::Read => "View the resource",
            Self::Add => "Create new items",
            Self::Edit => "Edit own items",
            Self::Modify => "Modify any item",
            Self::Delete => "Remove items",
            Self::Post => "Post replies and comments",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
