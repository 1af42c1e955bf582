//! Snapshot persistence for the catalog.
//!
//! The store keeps its records in memory and mirrors them through a
//! `Persister` after every mutation. The contract is deliberately blunt:
//! load everything, save everything. There are no partial writes, and two
//! persisters pointed at the same file will clobber each other.

use crate::catalog::model::Product;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Whole-collection persistence seam.
///
/// `load_all` returns every record in stored order; `save_all` replaces the
/// stored snapshot with `products` in full.
pub trait Persister {
    fn load_all(&self) -> Result<Vec<Product>>;
    fn save_all(&mut self, products: &[Product]) -> Result<()>;
}

/// Persists the catalog as a pretty-printed JSON array at a fixed path,
/// overwriting the file in full on every save.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persister for JsonFile {
    fn load_all(&self) -> Result<Vec<Product>> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save_all(&mut self, products: &[Product]) -> Result<()> {
        let data = serde_json::to_string_pretty(products)
            .with_context(|| format!("serializing catalog for {}", self.path.display()))?;
        fs::write(&self.path, data).with_context(|| format!("writing {}", self.path.display()))
    }
}

/// In-memory stand-in for a backing file. Clones share one snapshot, so a
/// test can hand a clone to a store and inspect what got saved, or open a
/// second store over the same snapshot to exercise a reload.
#[derive(Clone, Default)]
pub struct InMemory {
    records: Arc<Mutex<Vec<Product>>>,
}

impl InMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last saved snapshot (empty if the lock is poisoned).
    pub fn snapshot(&self) -> Vec<Product> {
        self.load_all().unwrap_or_default()
    }
}

impl Persister for InMemory {
    fn load_all(&self) -> Result<Vec<Product>> {
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow!("snapshot lock poisoned"))?;
        Ok(records.clone())
    }

    fn save_all(&mut self, products: &[Product]) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow!("snapshot lock poisoned"))?;
        *records = products.to_vec();
        Ok(())
    }
}
