//! Tests for ItemService

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use vineyard::application::services::ItemService;
use vineyard::application::ApplicationError;
use vineyard::infrastructure::traits::RealFileSystem;

fn service() -> ItemService {
    ItemService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_items_file_when_loading_then_active_items_come_first() {
    let items = service()
        .load(Path::new("tests/resources/items.json"))
        .unwrap();

    let labels: Vec<_> = items.iter().map(|i| i.label()).collect();
    assert_eq!(
        labels,
        [
            "Bread (Active)",
            "Apples (Active)",
            "Milk (Expired)",
            "Cheese (Expired)"
        ]
    );
}

#[test]
fn given_item_without_name_when_loading_then_invalid_data() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("items.json");
    std::fs::write(&path, r#"[{"isExpired": true}]"#).unwrap();

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::InvalidData { .. }), "{:?}", err);
}
