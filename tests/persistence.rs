// Backing-file lifecycle: startup fallbacks, round trips, and save failures.

use anyhow::Result;
use serde_json::Value;
use std::fs;
use stockroom::{CatalogStore, Product, ProductDraft};
use tempfile::TempDir;

fn draft(title: &str, code: &str) -> ProductDraft {
    ProductDraft::new(title, "mercadería", 300.0, "imagen.png", code, 10)
}

#[test]
fn missing_file_starts_empty_and_assigns_id_one() -> Result<()> {
    let dir = TempDir::new()?;
    let mut store = CatalogStore::open(dir.path().join("absent.json"));
    assert!(store.is_empty());

    let product = store.add(draft("producto 2", "bcd153")).expect("add");
    assert_eq!(product.id, 1);
    Ok(())
}

#[test]
fn malformed_file_starts_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("productos.json");
    fs::write(&path, "{ not json")?;

    let store = CatalogStore::open(&path);
    assert!(store.is_empty());
    Ok(())
}

#[test]
fn reload_yields_the_same_records_in_the_same_order() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("productos.json");

    let mut store = CatalogStore::open(&path);
    store.add(draft("producto 2", "bcd153")).expect("add");
    store.add(draft("producto 3", "bcd194")).expect("add");
    let before: Vec<Product> = store.products().to_vec();
    drop(store);

    let reloaded = CatalogStore::open(&path);
    assert_eq!(reloaded.products(), before.as_slice());
    Ok(())
}

#[test]
fn reload_resumes_the_id_counter_past_existing_records() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("productos.json");

    let mut store = CatalogStore::open(&path);
    store.add(draft("producto 2", "bcd153")).expect("add");
    store.add(draft("producto 3", "bcd194")).expect("add");
    drop(store);

    let mut reloaded = CatalogStore::open(&path);
    let product = reloaded.add(draft("producto 4", "bcd200")).expect("add");
    assert_eq!(product.id, 3);
    Ok(())
}

#[test]
fn reload_after_deleting_the_highest_id_hands_it_out_again() -> Result<()> {
    // The counter is seeded from the maximum id on file, so a deleted top id
    // comes back after a reload. Within one process lifetime it never would.
    let dir = TempDir::new()?;
    let path = dir.path().join("productos.json");

    let mut store = CatalogStore::open(&path);
    store.add(draft("producto 2", "bcd153")).expect("add");
    store.add(draft("producto 3", "bcd194")).expect("add");
    store.delete(2).expect("delete");
    drop(store);

    let mut reloaded = CatalogStore::open(&path);
    let product = reloaded.add(draft("producto 4", "bcd200")).expect("add");
    assert_eq!(product.id, 2);
    Ok(())
}

#[test]
fn counter_seeds_from_max_id_not_record_count() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("productos.json");
    let seeded = vec![
        serde_json::json!({
            "id": 3, "title": "a", "description": "d", "price": 1.0,
            "thumbnail": "t.png", "code": "c-3", "stock": 1
        }),
        serde_json::json!({
            "id": 7, "title": "b", "description": "d", "price": 1.0,
            "thumbnail": "t.png", "code": "c-7", "stock": 1
        }),
    ];
    fs::write(&path, serde_json::to_string_pretty(&seeded)?)?;

    let mut store = CatalogStore::open(&path);
    assert_eq!(store.len(), 2);
    let product = store.add(draft("c", "c-8")).expect("add");
    assert_eq!(product.id, 8);
    Ok(())
}

#[test]
fn backing_file_is_a_readable_json_array() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("productos.json");

    let mut store = CatalogStore::open(&path);
    store.add(draft("producto 2", "bcd153")).expect("add");

    let raw = fs::read_to_string(&path)?;
    assert!(raw.starts_with("[\n"), "expected a pretty-printed array");

    let value: Value = serde_json::from_str(&raw)?;
    let records = value.as_array().expect("top-level array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["title"], "producto 2");
    assert_eq!(records[0]["code"], "bcd153");
    assert_eq!(records[0]["stock"], 10);
    Ok(())
}

#[test]
fn failed_save_keeps_the_in_memory_mutation() -> Result<()> {
    // Pointing the store at a directory makes every save fail; the add must
    // still land in memory while the backend stays untouched.
    let dir = TempDir::new()?;
    let mut store = CatalogStore::open(dir.path());

    let product = store.add(draft("producto 2", "bcd153")).expect("add");
    assert_eq!(product.id, 1);
    assert_eq!(store.len(), 1);

    let reloaded = CatalogStore::open(dir.path());
    assert!(reloaded.is_empty());
    Ok(())
}
