//! Tests for TomlStoreRepository

use tempfile::TempDir;

use taxo::domain::{CategoryId, DomainError, HierarchyStore};
use taxo::infrastructure::{StorageError, StoreRepository, TomlStoreRepository};

#[test]
fn given_missing_snapshot_when_loading_then_empty_store() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let repo = TomlStoreRepository::new(temp.path().join("taxonomy.toml"));

    // Act
    let store = repo.load().unwrap();

    // Assert
    assert!(store.is_empty());
}

#[test]
fn given_saved_store_when_loading_then_ids_order_and_links_survive() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("taxonomy.toml");
    let repo = TomlStoreRepository::new(&path);

    let mut store = HierarchyStore::new();
    let music = store.create_category("Music", None).unwrap();
    let rock = store.create_category("Rock", Some(music.id)).unwrap();
    let books = store.create_category("Books", None).unwrap();

    // Act
    repo.save(&store).unwrap();
    let reloaded = repo.load().unwrap();

    // Assert
    let ids: Vec<CategoryId> = reloaded.categories().map(|c| c.id).collect();
    assert_eq!(ids, vec![music.id, rock.id, books.id]);
    assert_eq!(reloaded.children_of(&music.id)[0].id, rock.id);
    assert_eq!(
        reloaded.find_category(&rock.id).unwrap().created_at,
        store.find_category(&rock.id).unwrap().created_at
    );
}

#[test]
fn given_save_into_missing_directory_when_saving_then_creates_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("taxonomy.toml");
    let repo = TomlStoreRepository::new(&path);

    repo.save(&HierarchyStore::new()).unwrap();

    assert!(path.exists());
}

#[test]
fn given_malformed_snapshot_when_loading_then_malformed_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("taxonomy.toml");
    std::fs::write(&path, "categories = \"not a table\"").unwrap();
    let repo = TomlStoreRepository::new(&path);

    // Act
    let result = repo.load();

    // Assert
    assert!(matches!(result, Err(StorageError::Malformed { .. })));
}

#[test]
fn given_snapshot_with_duplicate_roots_when_loading_then_domain_rejection() {
    // Arrange - structurally valid TOML that violates sibling uniqueness
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("taxonomy.toml");
    let content = r#"
[[categories]]
id = "0a0f5836-6e5d-4c55-a7c9-92a4d3a4c001"
name = "Music"
is_active = true
created_at = "2026-08-01T10:00:00Z"

[[categories]]
id = "0a0f5836-6e5d-4c55-a7c9-92a4d3a4c002"
name = "Music"
is_active = true
created_at = "2026-08-01T10:05:00Z"
"#;
    std::fs::write(&path, content).unwrap();
    let repo = TomlStoreRepository::new(&path);

    // Act
    let result = repo.load();

    // Assert
    assert!(matches!(
        result,
        Err(StorageError::Domain(DomainError::DuplicateSiblingName { .. }))
    ));
}

#[test]
fn given_snapshot_rows_sharing_an_id_when_loading_then_domain_rejection() {
    // Arrange - corrupted snapshot reusing an id across rows
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("taxonomy.toml");
    let content = r#"
[[categories]]
id = "0a0f5836-6e5d-4c55-a7c9-92a4d3a4c010"
name = "Music"
is_active = true
created_at = "2026-08-01T10:00:00Z"

[[categories]]
id = "0a0f5836-6e5d-4c55-a7c9-92a4d3a4c010"
name = "Books"
is_active = true
created_at = "2026-08-01T10:05:00Z"
"#;
    std::fs::write(&path, content).unwrap();
    let repo = TomlStoreRepository::new(&path);

    // Act
    let result = repo.load();

    // Assert
    assert!(matches!(
        result,
        Err(StorageError::Domain(DomainError::DuplicateId(_)))
    ));
}

#[test]
fn given_snapshot_row_with_unknown_parent_when_loading_then_restored_as_root() {
    // Arrange - parent id that matches no row degrades to root, like create
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("taxonomy.toml");
    let content = r#"
[[categories]]
id = "0a0f5836-6e5d-4c55-a7c9-92a4d3a4c003"
name = "Dangling"
parent_id = "ffffffff-ffff-4fff-8fff-ffffffffffff"
is_active = true
created_at = "2026-08-01T10:00:00Z"
"#;
    std::fs::write(&path, content).unwrap();
    let repo = TomlStoreRepository::new(&path);

    // Act
    let store = repo.load().unwrap();

    // Assert
    assert_eq!(store.len(), 1);
    assert_eq!(store.root_categories().len(), 1);
    assert!(store.root_categories()[0].parent_id.is_none());
}
