//! The catalog store: an owned record collection plus its persistence mirror.
//!
//! Every mutating operation validates first, touches the in-memory collection
//! second, and saves the whole collection last. Rejections are ordinary
//! values, not errors; the only failure the store itself reports is a save
//! that could not reach the backend, and that never unwinds the mutation.

use crate::catalog::model::{Product, ProductDraft, ProductPatch};
use crate::catalog::persist::{JsonFile, Persister};
use std::fmt;
use std::path::Path;

/// Why a mutating operation or lookup was turned away.
///
/// These are expected outcomes of normal use. Filesystem trouble travels on a
/// separate channel and never surfaces through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A required field was empty on add (zero, for the numeric fields).
    MissingField(&'static str),
    /// Another record already carries this code.
    DuplicateCode(String),
    /// No record with the requested id.
    NotFound(u64),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingField(field) => write!(f, "missing required field '{field}'"),
            Rejection::DuplicateCode(code) => write!(f, "code '{code}' is already in use"),
            Rejection::NotFound(id) => write!(f, "no product with id {id}"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Ordered product collection with an id counter, mirrored through a
/// `Persister` after every mutation.
pub struct CatalogStore {
    products: Vec<Product>,
    id_counter: u64,
    persister: Box<dyn Persister>,
}

impl CatalogStore {
    /// Open a store backed by the JSON file at `path`.
    ///
    /// A missing, unreadable, or malformed file degrades to an empty catalog
    /// rather than failing the caller.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_persister(Box::new(JsonFile::new(path.as_ref())))
    }

    /// Open a store over any persistence backend. Loads the full record set
    /// once (empty on failure) and resumes the id counter past the highest id
    /// on record, so freshly assigned ids never collide with loaded ones.
    pub fn with_persister(persister: Box<dyn Persister>) -> Self {
        let products = persister.load_all().unwrap_or_default();
        let id_counter = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            products,
            id_counter,
            persister,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Mirror the collection to the backend. A failed save is reported to
    /// the operator and swallowed; the in-memory state keeps the mutation,
    /// so memory and disk can diverge until the next successful save.
    fn persist(&mut self) {
        if let Err(err) = self.persister.save_all(&self.products) {
            eprintln!("catalog save failed: {err:#}");
        }
    }

    /// Append a new record built from `draft`, assigning the next id.
    pub fn add(&mut self, draft: ProductDraft) -> Result<Product, Rejection> {
        if let Some(field) = draft.missing_field() {
            return Err(Rejection::MissingField(field));
        }
        if self.products.iter().any(|p| p.code == draft.code) {
            return Err(Rejection::DuplicateCode(draft.code));
        }
        let product = draft.into_product(self.next_id());
        self.products.push(product.clone());
        self.persist();
        Ok(product)
    }

    /// Merge `patch` into the record with this id.
    pub fn update(&mut self, id: u64, patch: ProductPatch) -> Result<Product, Rejection> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Err(Rejection::NotFound(id));
        };
        patch.apply(product);
        let updated = product.clone();
        self.persist();
        Ok(updated)
    }

    /// Remove the record with this id, returning it.
    pub fn delete(&mut self, id: u64) -> Result<Product, Rejection> {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            return Err(Rejection::NotFound(id));
        };
        let removed = self.products.remove(index);
        self.persist();
        Ok(removed)
    }

    /// All records in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First record with this id.
    pub fn get(&self, id: u64) -> Result<&Product, Rejection> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(Rejection::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
