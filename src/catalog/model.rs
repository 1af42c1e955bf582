//! Product records and the field-presence rules applied before they enter
//! the catalog.

use serde::{Deserialize, Serialize};

/// One catalog record. The `id` is assigned by the store; `code` is the
/// caller-supplied secondary identifier and must be unique across records.
/// Field order here is the serialization order of the backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u64,
}

/// The six caller-supplied fields of a product, before an id exists.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u64,
}

impl ProductDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: u64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock,
        }
    }

    /// First required field that is absent, if any, checked in declaration
    /// order. A `price` or `stock` of zero counts as absent, the same as an
    /// empty string.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            return Some("title");
        }
        if self.description.is_empty() {
            return Some("description");
        }
        if self.price == 0.0 {
            return Some("price");
        }
        if self.thumbnail.is_empty() {
            return Some("thumbnail");
        }
        if self.code.is_empty() {
            return Some("code");
        }
        if self.stock == 0 {
            return Some("stock");
        }
        None
    }

    pub(crate) fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

/// Partial update for an existing record. Supplied fields replace the current
/// values; absent fields are left untouched. The `id` is replaceable like any
/// other field; callers that rewrite it are trusted to keep ids unique.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u64>,
}

impl ProductPatch {
    /// Merge this patch into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(id) = self.id {
            product.id = id;
        }
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(thumbnail) = self.thumbnail {
            product.thumbnail = thumbnail;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}
