use async_trait::async_trait;

use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product storage.
///
/// Defines the data access interface for products. Store operations are
/// total over their inputs: "not found" is an ordinary return value
/// (`Option`/`bool`), never an error, and there are no other failure modes
/// (no I/O, no external calls).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All current products, in insertion order.
    async fn list(&self) -> Vec<Product>;

    /// Look up a product by id.
    async fn get_by_id(&self, id: u64) -> Option<Product>;

    /// Store a new product. The repository assigns the id and creation date;
    /// anything the caller put in those fields is discarded.
    async fn create(&self, input: CreateProduct) -> Product;

    /// Overwrite the mutable fields of an existing product.
    /// Returns `None` (and performs no mutation) when the id is unknown.
    async fn update(&self, id: u64, input: UpdateProduct) -> Option<Product>;

    /// Remove a product. Returns `false` when no product has that id.
    async fn delete(&self, id: u64) -> bool;
}
