//! In-memory implementation of ProductRepository

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::instrument;

use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Table state guarded by a single lock. The product list (insertion order)
/// and the id counter live together so no writer can observe one without
/// the other.
struct ProductTable {
    products: Vec<Product>,
    next_id: u64,
}

/// In-memory implementation of the ProductRepository.
///
/// The whole table sits behind one `RwLock`: reads share the lock, writers
/// serialize against readers and each other. Operations are short and never
/// block on I/O, so the coarse lock is not a throughput concern.
///
/// Assigned ids are strictly increasing for the lifetime of the store. The
/// counter is never decremented or reset, so a deleted product's id is never
/// reused.
///
/// Reads hand out clones; mutating a returned `Product` cannot change store
/// state without going through [`ProductRepository::update`].
pub struct MemoryProductRepository {
    table: RwLock<ProductTable>,
}

impl MemoryProductRepository {
    /// Create an empty repository. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(ProductTable {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a repository pre-populated with `products`.
    ///
    /// The id counter starts just above the highest seeded id.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            table: RwLock::new(ProductTable { products, next_id }),
        }
    }

    // A poisoned lock only means another thread panicked mid-operation; every
    // write is a plain field assignment or a single push/remove, so the table
    // is still coherent and the guard can be taken over.
    fn read(&self) -> RwLockReadGuard<'_, ProductTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProductTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: u64) -> Option<Product> {
        self.read().products.iter().find(|p| p.id == id).cloned()
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> Product {
        let mut table = self.write();
        let id = table.next_id;
        table.next_id += 1;

        let product = Product::new(id, input);
        table.products.push(product.clone());

        tracing::info!(product_id = id, "Product created");
        product
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: u64, input: UpdateProduct) -> Option<Product> {
        let mut table = self.write();
        let product = table.products.iter_mut().find(|p| p.id == id)?;
        product.apply_update(input);

        tracing::info!(product_id = id, "Product updated");
        Some(product.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> bool {
        let mut table = self.write();
        match table.products.iter().position(|p| p.id == id) {
            Some(index) => {
                table.products.remove(index);
                tracing::info!(product_id = id, "Product deleted");
                true
            }
            None => false,
        }
    }
}
