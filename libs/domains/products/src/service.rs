use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductId, ReplaceProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Every operation on an existing id loads the row first and fails with
/// `NotFound` before anything is written.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product, ordered by id
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: ProductId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product (available by default)
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.insert(input).await
    }

    /// Replace name, price and availability of an existing product
    pub async fn replace_product(
        &self,
        id: ProductId,
        input: ReplaceProduct,
    ) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.apply_replace(input);
        self.repository.update(product).await
    }

    /// Flip availability
    pub async fn toggle_availability(&self, id: ProductId) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.toggle_availability();
        self.repository.update(product).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: ProductId) -> ProductResult<()> {
        self.get_product(id).await?;

        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn product(id: ProductId, availability: bool) -> Product {
        Product {
            id,
            name: "Monitor".to_string(),
            price: 300.0,
            availability,
        }
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(2000))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(2000).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(2000)));
    }

    #[tokio::test]
    async fn test_replace_missing_product_never_writes() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .replace_product(
                1,
                ReplaceProduct {
                    name: "Monitor".to_string(),
                    price: 10.0,
                    availability: true,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_replace_overwrites_all_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(product(id, true))));
        mock_repo
            .expect_update()
            .withf(|p| p.id == 3 && p.name == "Teclado" && p.price == 25.5 && !p.availability)
            .returning(Ok);

        let service = ProductService::new(mock_repo);
        let updated = service
            .replace_product(
                3,
                ReplaceProduct {
                    name: "Teclado".to_string(),
                    price: 25.5,
                    availability: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Teclado");
    }

    #[tokio::test]
    async fn test_toggle_flips_availability() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(product(id, true))));
        mock_repo
            .expect_update()
            .withf(|p| !p.availability)
            .times(1)
            .returning(Ok);

        let service = ProductService::new(mock_repo);
        let toggled = service.toggle_availability(4).await.unwrap();

        assert!(!toggled.availability);
    }

    #[tokio::test]
    async fn test_delete_missing_product_never_deletes() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete().never();

        let service = ProductService::new(mock_repo);
        assert!(matches!(
            service.delete_product(8).await,
            Err(ProductError::NotFound(8))
        ));
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(product(id, true))));
        mock_repo
            .expect_delete()
            .with(eq(8))
            .times(1)
            .returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        service.delete_product(8).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_delegates_to_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_insert().times(1).returning(|input| {
            Ok(Product {
                id: 1,
                name: input.name,
                price: input.price,
                availability: true,
            })
        });

        let service = ProductService::new(mock_repo);
        let created = service
            .create_product(CreateProduct {
                name: "Mouse - Testing".to_string(),
                price: 48.0,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert!(created.availability);
    }
}
