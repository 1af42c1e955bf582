//! File-backed product catalog.
//!
//! A `CatalogStore` holds an ordered collection of product records in memory
//! and mirrors the whole collection to a flat JSON file after every mutation.
//! Records carry a store-assigned integer id and a caller-supplied unique
//! code. There is no locking and no partial write: one store instance owns
//! one backing file, and every save overwrites it in full.

pub mod catalog;

pub use catalog::{
    CatalogStore, DEFAULT_STORE_PATH, InMemory, JsonFile, Persister, Product, ProductDraft,
    ProductPatch, Rejection,
};
