//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations.
///
/// The service layer validates input, maps store absence to [`ProductError`]
/// for the transport layer, and delegates storage to the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products in insertion order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        Ok(self.repository.list().await)
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product. The store assigns the id and creation date.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        Ok(self.repository.create(input).await)
    }

    /// Update an existing product, overwriting its mutable fields
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: u64, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<()> {
        if self.repository.delete(id).await {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn tablet() -> CreateProduct {
        CreateProduct {
            name: "Tablet".to_string(),
            description: "10-inch tablet".to_string(),
            price: "499.99".parse().unwrap(),
            stock_quantity: 30,
        }
    }

    #[tokio::test]
    async fn test_get_product_maps_absence_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| None);

        let service = ProductService::new(repo);
        let err = service.get_product(999).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input_before_store() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let service = ProductService::new(repo);
        let err = service
            .create_product(CreateProduct {
                name: String::new(),
                ..tablet()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_product_maps_absence_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| None);

        let service = ProductService::new(repo);
        let err = service
            .update_product(
                999,
                UpdateProduct {
                    name: "X".to_string(),
                    description: String::new(),
                    price: "1.00".parse().unwrap(),
                    stock_quantity: 1,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_delete_product_maps_false_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| false);

        let service = ProductService::new(repo);
        let err = service.delete_product(1).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(1)));
    }

    #[tokio::test]
    async fn test_delete_product_succeeds_when_store_removes() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| true);

        let service = ProductService::new(repo);
        assert!(service.delete_product(1).await.is_ok());
    }
}
