//! End-to-end flows over the seeded editors
//!
//! Drives the editor the way a rendering surface would: select, edit the
//! draft, save or abandon, and walk the delete confirmation round-trip.

use lattice_editor::{seed, EditorError, MatrixEditor, Permission};

fn id_of(editor: &MatrixEditor, name: &str) -> i64 {
    editor
        .entities()
        .iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("no entity named {}", name))
        .id
}

#[test]
fn edit_and_save_roundtrip() {
    let mut editor = seed::group_roles_editor();
    let member = id_of(&editor, "Member");
    editor.select_entity(member).unwrap();

    // Member's first attachment is "Group Members" [Read, Add, Delete]
    assert!(editor.toggle_permission(0, Permission::Edit).unwrap());
    editor.set_draft_name("Senior Member").unwrap();
    editor.set_draft_description("Member with elevated rights").unwrap();
    editor.save_draft().unwrap();

    let saved = editor.entity(member).unwrap();
    assert_eq!(saved.name, "Senior Member");
    assert_eq!(
        saved.description.as_deref(),
        Some("Member with elevated rights")
    );
    assert!(saved.resources[0].grants(Permission::Edit));
    // untouched permissions survive the save
    assert!(saved.resources[0].grants(Permission::Read));
}

#[test]
fn unsaved_edits_discarded_on_reselect() {
    let mut editor = seed::group_roles_editor();
    let member = id_of(&editor, "Member");
    let moderator = id_of(&editor, "Moderator");

    editor.select_entity(member).unwrap();
    editor.set_draft_name("Scratch").unwrap();
    editor.toggle_permission(0, Permission::Post).unwrap();

    // switching away and back drops the edits silently
    editor.select_entity(moderator).unwrap();
    editor.select_entity(member).unwrap();

    assert_eq!(editor.draft(), editor.entity(member));
    assert_eq!(editor.entity(member).unwrap().name, "Member");
}

#[test]
fn delete_requires_confirmation() {
    let mut editor = seed::security_rules_editor();
    let everyone = id_of(&editor, "Everyone");
    let before = editor.entities().len();

    // request then cancel: nothing happens
    editor.request_delete(everyone).unwrap();
    editor.cancel_delete();
    assert_eq!(editor.entities().len(), before);
    assert_eq!(editor.pending_delete(), None);

    // request then confirm: entity removed, selection falls back
    editor.request_delete(everyone).unwrap();
    editor.confirm_delete();
    assert_eq!(editor.entities().len(), before - 1);
    assert!(editor.entity(everyone).is_none());
    assert_eq!(editor.selection(), Some(editor.entities()[0].id));
}

#[test]
fn deleting_every_entity_then_adding_restarts_ids() {
    let mut editor = seed::security_rules_editor();

    while let Some(first) = editor.entities().first().map(|e| e.id) {
        editor.request_delete(first).unwrap();
        editor.confirm_delete();
    }
    assert_eq!(editor.selection(), None);
    assert_eq!(editor.draft(), None);
    assert_eq!(editor.save_draft(), Err(EditorError::NoSelection));

    // empty collection seeds the id sequence again
    let id = editor.add_entity();
    assert_eq!(id, 1);
    assert_eq!(editor.draft().unwrap().name, "New 1");
    assert_eq!(editor.selection(), Some(1));
}

#[test]
fn add_entity_after_seed_continues_id_sequence() {
    let mut editor = seed::group_roles_editor();
    let max = editor.entities().iter().map(|e| e.id).max().unwrap();

    let id = editor.add_entity();
    assert!(id > max);

    // the new role starts blank and is immediately editable
    assert!(editor.draft().unwrap().resources.is_empty());
    editor.attach_resource("Group Calendar").unwrap();
    editor.toggle_permission(0, Permission::Read).unwrap();
    editor.save_draft().unwrap();

    let saved = editor.entity(id).unwrap();
    assert_eq!(saved.resources[0].resource, "Group Calendar");
    assert!(saved.resources[0].grants(Permission::Read));
}

#[test]
fn picker_candidates_track_draft_attachments() {
    let mut editor = seed::group_roles_editor();
    let admin = id_of(&editor, "Administrator");
    editor.select_entity(admin).unwrap();
    editor.open_resource_picker();

    let catalog_len = editor.profile().resources.len();
    let attached = editor.draft().unwrap().resources.len();
    let candidates = editor.available_resources();
    assert_eq!(candidates.len(), catalog_len - attached);
    for info in &candidates {
        assert!(!editor.draft().unwrap().has_resource(&info.name));
    }

    // attaching a candidate removes it from the list
    let next = candidates[0].name.clone();
    editor.attach_resource(&next).unwrap();
    assert!(
        !editor
            .available_resources()
            .iter()
            .any(|r| r.name == next)
    );
    editor.close_resource_picker();
    assert!(!editor.is_picker_open());
}

#[test]
fn rule_editor_rejects_descriptions() {
    let mut editor = seed::security_rules_editor();
    assert!(matches!(
        editor.set_draft_description("not a thing for rules"),
        Err(EditorError::DescriptionUnsupported(_))
    ));
    assert_eq!(editor.draft().unwrap().description, None);
}
