use clap::Parser;
use std::path::PathBuf;
use stockroom::{CatalogStore, DEFAULT_STORE_PATH, ProductDraft, ProductPatch};

/// Walk a catalog store through every operation, printing each outcome.
///
/// This is scaffolding for eyeballing the store against its backing file;
/// the library is the reusable surface.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Backing file for the catalog.
    #[arg(long, default_value = DEFAULT_STORE_PATH)]
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let mut store = CatalogStore::open(&cli.file);
    println!(
        "opened catalog at {} with {} record(s)",
        cli.file.display(),
        store.len()
    );

    println!("--- adding products ---");
    add(
        &mut store,
        ProductDraft::new("producto 2", "mercadería", 300.0, "imagen1.png", "bcd153", 10),
    );
    add(
        &mut store,
        ProductDraft::new("producto 3", "mercadería", 400.0, "imagen2.png", "bcd194", 5),
    );

    println!("--- adding a product with a repeated code ---");
    add(
        &mut store,
        ProductDraft::new("producto 3", "mercadería", 400.0, "imagen2.png", "bcd194", 5),
    );

    println!("--- adding a product with an empty field ---");
    add(
        &mut store,
        ProductDraft::new("producto 4", "", 300.0, "imagen3.png", "bcd125", 10),
    );

    println!("--- current catalog ---");
    list(&store);

    println!("--- lookup by id ---");
    get(&store, 1);

    println!("--- lookup by missing id ---");
    get(&store, 6);

    println!("--- updating product 1 ---");
    let patch = ProductPatch {
        title: Some("producto actualizado1".to_string()),
        price: Some(500.0),
        stock: Some(8),
        ..Default::default()
    };
    match store.update(1, patch) {
        Ok(product) => println!("updated id 1: {product:?}"),
        Err(reason) => println!("update of id 1 rejected: {reason}"),
    }

    println!("--- catalog after update ---");
    list(&store);

    println!("--- deleting product 1 ---");
    match store.delete(1) {
        Ok(product) => println!("deleted '{}' (id {})", product.title, product.id),
        Err(reason) => println!("delete of id 1 rejected: {reason}"),
    }

    println!("--- catalog after delete ---");
    list(&store);
}

fn add(store: &mut CatalogStore, draft: ProductDraft) {
    let title = draft.title.clone();
    match store.add(draft) {
        Ok(product) => println!("added '{title}' as id {}", product.id),
        Err(reason) => println!("add of '{title}' rejected: {reason}"),
    }
}

fn get(store: &CatalogStore, id: u64) {
    match store.get(id) {
        Ok(product) => println!("found id {id}: {product:?}"),
        Err(reason) => println!("lookup of id {id} failed: {reason}"),
    }
}

fn list(store: &CatalogStore) {
    if store.is_empty() {
        println!("(catalog is empty)");
        return;
    }
    for product in store.products() {
        println!(
            "  #{} '{}' code={} price={} stock={}",
            product.id, product.title, product.code, product.price, product.stock
        );
    }
}
