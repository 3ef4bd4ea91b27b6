use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductId};

/// Repository trait for Product persistence
///
/// Row-oriented CRUD over the products table. Implementations never
/// validate; callers hand them already-checked values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by id ascending
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// Insert a new product; availability starts as `true`
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Persist every field of `product`, `NotFound` if the row is gone
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID, `false` if no row matched
    async fn delete(&self, id: ProductId) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id,
            name: input.name,
            price: input.price,
            availability: true,
        };

        self.products.write().await.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let slot = products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *slot = product.clone();

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> ProductResult<bool> {
        let removed = self.products.write().await.remove(&id).is_some();

        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids_and_availability() {
        let repo = InMemoryProductRepository::new();

        let first = repo.insert(input("Mouse", 48.0)).await.unwrap();
        let second = repo.insert(input("Monitor", 300.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.availability);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["c", "a", "b"] {
            repo.insert(input(name, 1.0)).await.unwrap();
        }

        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let first = repo.insert(input("Mouse", 48.0)).await.unwrap();

        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());

        let next = repo.insert(input("Keyboard", 20.0)).await.unwrap();
        assert_eq!(next.id, 2);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let ghost = Product {
            id: 99,
            name: "Ghost".to_string(),
            price: 1.0,
            availability: true,
        };

        let err = repo.update(ghost).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_update_overwrites_row() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.insert(input("Mouse", 48.0)).await.unwrap();
        product.availability = false;

        repo.update(product.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(product.id).await.unwrap(), Some(product));
    }
}
