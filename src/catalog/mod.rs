//! Catalog store wiring.
//!
//! This module wraps a product collection backed by a JSON file on disk (for
//! example `productos.json`) so callers can add, look up, update, and delete
//! records through one owning value. Types here mirror the backing file's
//! fields; callers use `CatalogStore` for all operations and `Persister` when
//! a different backend (such as the in-memory fake) is wanted.

pub mod model;
pub mod persist;
pub mod store;

pub use model::{Product, ProductDraft, ProductPatch};
pub use persist::{InMemory, JsonFile, Persister};
pub use store::{CatalogStore, Rejection};

/// Default relative path for the backing file.
pub const DEFAULT_STORE_PATH: &str = "productos.json";
