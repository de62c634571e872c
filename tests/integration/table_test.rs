//! Tests for the record store and the relationship table controller

use crate::utils::{create_test_member, lovelace_family};
use family_table::{
    EditOutcome, FamilyTable, FamilyTableConfig, FamilyTableError, Gender, InMemorySource,
    JsonFileSource, RecordStore, SelectionState, build_rows, canonicalize_members, render_rows,
};
use std::sync::Arc;

#[tokio::test]
async fn test_load_installs_canonical_collection() {
    let mut store = RecordStore::new(InMemorySource::with_tree(1, lovelace_family()));
    assert!(store.collection().is_none());
    assert!(store.get(3).is_none());

    let collection = store.load(1).await.unwrap();

    assert_eq!(collection.tree_id(), Some(1));
    assert_eq!(collection.len(), 6);
    let byron = store.get(3).unwrap();
    assert_eq!(byron.primary_parent_id, Some(2));
    assert_eq!(byron.secondary_parent_id, Some(1));
    assert_eq!(store.generation(), 1);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_collection() {
    let source = InMemorySource::with_tree(1, lovelace_family());
    let mut store = RecordStore::new(source);

    let first = store.load(1).await.unwrap();
    store.source().fail_tree(1, "connection refused");

    let result = store.load(1).await;
    assert!(matches!(result, Err(FamilyTableError::SourceLoad { tree_id: 1, .. })));
    assert!(result.unwrap_err().is_source_failure());

    let current = store.collection().unwrap();
    assert!(Arc::ptr_eq(&first, &current));
    assert_eq!(store.generation(), 1);
}

#[tokio::test]
async fn test_failed_first_load_leaves_store_empty() {
    let mut store = RecordStore::new(InMemorySource::new());

    assert!(store.load(42).await.is_err());
    assert!(store.collection().is_none());
    assert!(store.tree_id().is_none());
}

#[tokio::test]
async fn test_table_rows() {
    let mut table = FamilyTable::new(
        InMemorySource::with_tree(1, lovelace_family()),
        FamilyTableConfig::default(),
    );
    assert!(table.rows().is_empty());
    assert_eq!(table.display_name(Some(1)), "-");

    table.set_tree(1).await.unwrap();
    let rows = table.rows();

    assert_eq!(rows.len(), 6);
    let byron = &rows[2];
    assert_eq!(byron.full_name, "Byron King");
    assert_eq!(byron.primary_parent, "William King");
    assert_eq!(byron.secondary_parent, "Ada Lovelace");
    assert_eq!(byron.partners, "Anne Isabella");

    let ada = &rows[0];
    assert_eq!(ada.primary_parent, "-");
    assert_eq!(ada.secondary_parent, "-");

    let ralph = &rows[4];
    assert_eq!(ralph.partners, "-");

    let orphan = &rows[5];
    assert_eq!(orphan.primary_parent, "-");
    assert_eq!(orphan.secondary_parent, "William King");

    assert_eq!(table.display_name(Some(4)), "Anne Isabella");
    assert_eq!(table.display_name(None), "-");
}

#[tokio::test]
async fn test_duplicate_ids_are_all_rendered() {
    let members = vec![
        create_test_member(1, "Ada", "Lovelace", Gender::Female),
        create_test_member(2, "William", "King", Gender::Male),
        create_test_member(3, "Byron", "King", Gender::Male).with_parents(Some(1), Some(2)),
        create_test_member(3, "Byron", "Second", Gender::Male).with_parents(Some(1), Some(2)),
    ];

    let canonical = canonicalize_members(members.clone(), false);
    let rows = build_rows(&canonical, &FamilyTableConfig::default());
    let names: Vec<&str> = rows.iter().map(|row| row.full_name.as_str()).collect();
    assert_eq!(names, vec!["Ada Lovelace", "William King", "Byron King", "Byron Second"]);

    // Both copies are canonicalized; lookups resolve to the first
    assert_eq!(rows[2].primary_parent, "William King");
    assert_eq!(rows[3].primary_parent, "William King");
    assert_eq!(canonical.member(3).map(|m| m.last_name.as_str()), Some("King"));

    let mut table = FamilyTable::new(InMemorySource::with_tree(4, members), FamilyTableConfig::default());
    table.set_tree(4).await.unwrap();
    assert_eq!(table.rows().len(), 4);
    assert_eq!(table.display_name(Some(3)), "Byron King");
}

#[tokio::test]
async fn test_partner_separator_and_dangling_partners() {
    let members = vec![
        create_test_member(1, "Henry", "Tudor", Gender::Male).with_partners([2, 3, 50]),
        create_test_member(2, "Catherine", "Aragon", Gender::Female),
        create_test_member(3, "Anne", "Boleyn", Gender::Female),
    ];
    let config = FamilyTableConfig {
        partner_separator: " / ".to_string(),
        ..Default::default()
    };
    let mut table = FamilyTable::new(InMemorySource::with_tree(9, members), config);
    table.set_tree(9).await.unwrap();

    assert_eq!(table.rows()[0].partners, "Catherine Aragon / Anne Boleyn / -");
}

#[tokio::test]
async fn test_changed_edit_triggers_full_reload() {
    let source = InMemorySource::with_tree(1, lovelace_family());
    let mut table = FamilyTable::new(source, FamilyTableConfig::default());
    table.set_tree(1).await.unwrap();
    let before = table.collection().unwrap();

    table.begin_edit(4);
    assert_eq!(table.selection(), SelectionState::Editing(4));
    assert_eq!(table.editing_member().map(|m| m.id), Some(4));

    // The edit surface saved a new name for member 4
    let mut edited = lovelace_family();
    edited[3].first_name = "Annabella".to_string();
    table.store().source().set_tree(1, edited);

    let reloaded = table.finish_edit(EditOutcome::Changed).await.unwrap();
    assert!(reloaded);
    assert_eq!(table.selection(), SelectionState::Idle);

    let after = table.collection().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(table.display_name(Some(4)), "Annabella Isabella");
    // The fresh collection went through canonicalization again
    assert_eq!(table.member(3).unwrap().primary_parent_id, Some(2));
    assert_eq!(table.store().source().fetch_count(), 2);
}

#[tokio::test]
async fn test_unchanged_edit_keeps_collection_instance() {
    let source = InMemorySource::with_tree(1, lovelace_family());
    let mut table = FamilyTable::new(source, FamilyTableConfig::default());
    table.set_tree(1).await.unwrap();
    let before = table.collection().unwrap();

    table.begin_edit(2);
    let reloaded = table.finish_edit(false).await.unwrap();

    assert!(!reloaded);
    assert!(Arc::ptr_eq(&before, &table.collection().unwrap()));
    assert_eq!(table.store().source().fetch_count(), 1);
}

#[tokio::test]
async fn test_changed_without_open_editor_does_not_reload() {
    let source = InMemorySource::with_tree(1, lovelace_family());
    let mut table = FamilyTable::new(source, FamilyTableConfig::default());
    table.set_tree(1).await.unwrap();
    let before = table.collection().unwrap();

    let reloaded = table.finish_edit(EditOutcome::Changed).await.unwrap();

    assert!(!reloaded);
    assert!(Arc::ptr_eq(&before, &table.collection().unwrap()));
    assert_eq!(table.store().source().fetch_count(), 1);
}

#[tokio::test]
async fn test_failed_reload_after_edit_keeps_rows() {
    let source = InMemorySource::with_tree(1, lovelace_family());
    let mut table = FamilyTable::new(source, FamilyTableConfig::default());
    table.set_tree(1).await.unwrap();
    let rows_before = table.rows();

    table.begin_edit(1);
    table.store().source().fail_tree(1, "server unavailable");
    let result = table.finish_edit(EditOutcome::Changed).await;

    assert!(matches!(result, Err(FamilyTableError::SourceLoad { .. })));
    assert_eq!(table.rows(), rows_before);
    assert_eq!(table.selection(), SelectionState::Idle);
}

#[tokio::test]
async fn test_tree_change_triggers_load() {
    let source = InMemorySource::with_tree(1, lovelace_family());
    source.set_tree(2, vec![create_test_member(10, "Grace", "Hopper", Gender::Female)]);
    let mut table = FamilyTable::new(source, FamilyTableConfig::default());

    table.set_tree(1).await.unwrap();
    table.set_tree(1).await.unwrap();
    assert_eq!(table.store().source().fetch_count(), 1);

    table.set_tree(2).await.unwrap();
    assert_eq!(table.tree_id(), Some(2));
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.display_name(Some(10)), "Grace Hopper");
    assert_eq!(table.display_name(Some(1)), "-");
}

#[tokio::test]
async fn test_reload_without_tree_is_an_error() {
    let mut table = FamilyTable::new(InMemorySource::new(), FamilyTableConfig::default());
    assert!(matches!(table.reload().await, Err(FamilyTableError::Config(_))));
}

#[tokio::test]
async fn test_highlight() {
    let mut table = FamilyTable::new(
        InMemorySource::with_tree(1, lovelace_family()),
        FamilyTableConfig::default(),
    );
    table.set_tree(1).await.unwrap();

    table.highlight(5);
    assert_eq!(table.selection().selected(), Some(5));
    table.clear_highlight();
    assert_eq!(table.selection(), SelectionState::Idle);
}

#[tokio::test]
async fn test_json_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let payload = r#"{"familyMembers": [
        {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "gender": "FEMALE", "birthday": "1815-12-10"},
        {"id": 2, "firstName": "William", "lastName": "King", "gender": "MALE"},
        {"id": 3, "firstName": "Byron", "lastName": "King", "gender": "MALE",
         "primaryParentId": 1, "secondaryParentId": 2}
    ]}"#;
    std::fs::write(dir.path().join("5.json"), payload).unwrap();

    let config = FamilyTableConfig::default();
    let source = JsonFileSource::new(dir.path(), config.date_format_config.clone());
    let mut store = RecordStore::new(source);

    let collection = store.load(5).await.unwrap();
    let byron = collection.member(3).unwrap();
    assert_eq!(byron.primary_parent_id, Some(2));
    assert_eq!(byron.secondary_parent_id, Some(1));

    let rows = build_rows(&collection, &config);
    let rendered = render_rows(&rows);
    assert!(rendered.starts_with("id\tname"));
    assert!(rendered.contains("3\tByron King\t-\t-\tMALE\tWilliam King\tAda Lovelace\t-"));

    let missing = store.load(6).await;
    assert!(matches!(missing, Err(FamilyTableError::SourceLoad { tree_id: 6, .. })));
    assert_eq!(store.tree_id(), Some(5));
}
