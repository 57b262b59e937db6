//! Hardcoded seed data for the two built-in screens
//!
//! The screens boot from fixed mock arrays; these constructors reproduce
//! them and hand back a fully wired editor with the first entity selected.
//! Nothing here persists: the data lives only for the lifetime of the view.

use shared::models::{Entity, Permission, ResourceAttachment};

use crate::catalog::EditorProfile;
use crate::editor::MatrixEditor;

/// Seed entities for the "Group Roles" screen
pub fn group_roles() -> Vec<Entity> {
    vec![
        Entity::new(1, "Administrator")
            .with_description("Full control over group content and membership")
            .with_resources(vec![
                ResourceAttachment::with_permissions(
                    "Group Members",
                    [
                        Permission::Read,
                        Permission::Add,
                        Permission::Edit,
                        Permission::Delete,
                    ],
                ),
                ResourceAttachment::with_permissions("Discussions", Permission::ALL),
                ResourceAttachment::with_permissions(
                    "Documents",
                    [
                        Permission::Read,
                        Permission::Add,
                        Permission::Edit,
                        Permission::Modify,
                        Permission::Delete,
                    ],
                ),
            ]),
        Entity::new(2, "Member")
            .with_description("Standard group participant")
            .with_resources(vec![
                ResourceAttachment::with_permissions(
                    "Group Members",
                    [Permission::Read, Permission::Add, Permission::Delete],
                ),
                ResourceAttachment::with_permissions(
                    "Discussions",
                    [Permission::Read, Permission::Post],
                ),
                ResourceAttachment::with_permissions(
                    "Photo Gallery",
                    [Permission::Read, Permission::Add],
                ),
            ]),
        Entity::new(3, "Moderator")
            .with_description("Keeps discussions and uploads in order")
            .with_resources(vec![
                ResourceAttachment::with_permissions(
                    "Discussions",
                    [
                        Permission::Read,
                        Permission::Edit,
                        Permission::Modify,
                        Permission::Delete,
                        Permission::Post,
                    ],
                ),
                ResourceAttachment::with_permissions(
                    "Photo Gallery",
                    [Permission::Read, Permission::Delete],
                ),
                ResourceAttachment::with_permissions(
                    "Announcements",
                    [Permission::Read, Permission::Add, Permission::Edit],
                ),
            ]),
    ]
}

/// Seed entities for the "Security Rules" screen
pub fn security_rules() -> Vec<Entity> {
    vec![
        Entity::new(1, "Everyone").with_resources(vec![ResourceAttachment::with_permissions(
            "Content Pages",
            [Permission::Read],
        )]),
        Entity::new(2, "Registered Users").with_resources(vec![
            ResourceAttachment::with_permissions(
                "Content Pages",
                [Permission::Read, Permission::Post],
            ),
            ResourceAttachment::with_permissions(
                "User Accounts",
                [Permission::Read, Permission::Edit],
            ),
        ]),
        Entity::new(3, "Administrators").with_resources(vec![
            ResourceAttachment::with_permissions(
                "User Accounts",
                [
                    Permission::Read,
                    Permission::Add,
                    Permission::Edit,
                    Permission::Modify,
                    Permission::Delete,
                ],
            ),
            ResourceAttachment::with_permissions(
                "Site Settings",
                [Permission::Read, Permission::Modify],
            ),
            ResourceAttachment::with_permissions("Audit Log", [Permission::Read]),
            ResourceAttachment::with_permissions(
                "API Tokens",
                [Permission::Read, Permission::Add, Permission::Delete],
            ),
        ]),
    ]
}

/// Fully seeded "Group Roles" editor
pub fn group_roles_editor() -> MatrixEditor {
    MatrixEditor::with_entities(EditorProfile::group_roles(), group_roles())
}

/// Fully seeded "Security Rules" editor
pub fn security_rules_editor() -> MatrixEditor {
    MatrixEditor::with_entities(EditorProfile::security_rules(), security_rules())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_seed_invariants(editor: &MatrixEditor) {
        let mut ids = HashSet::new();
        for entity in editor.entities() {
            assert!(ids.insert(entity.id), "duplicate entity id {}", entity.id);

            let mut names = HashSet::new();
            for attachment in &entity.resources {
                assert!(
                    names.insert(attachment.resource.as_str()),
                    "duplicate resource {} on entity {}",
                    attachment.resource,
                    entity.id
                );
                assert!(
                    editor.profile().has_resource(&attachment.resource),
                    "resource {} not in catalog",
                    attachment.resource
                );
            }
        }
    }

    #[test]
    fn test_group_roles_seed() {
        let editor = group_roles_editor();
        assert_seed_invariants(&editor);
        assert_eq!(editor.selection(), Some(1));
        assert_eq!(editor.draft(), editor.entity(1));
        assert!(
            editor
                .entities()
                .iter()
                .all(|e| e.description.is_some()),
            "every role carries a description"
        );
    }

    #[test]
    fn test_security_rules_seed() {
        let editor = security_rules_editor();
        assert_seed_invariants(&editor);
        assert_eq!(editor.selection(), Some(1));
        assert!(editor.entities().iter().all(|e| e.description.is_none()));
    }
}
