use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::ProductError;
use super::models::CreateProductCommand;
use super::models::Product;
use super::models::ProductId;
use super::models::UpdateProductCommand;
use super::ports::ProductRepository;
use super::ports::ProductServicePort;

/// Concrete implementation of ProductServicePort.
///
/// Commands arrive already validated, so nothing reaches the repository unless every
/// field passed. Update and delete read first and report `NotFound` themselves instead
/// of relying on the repository's row count.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    product_repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(product_repository: Arc<PR>) -> Self {
        Self { product_repository }
    }

    async fn existing(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(),
            name: command.name,
            description: command.description,
            price: command.price,
            created_at: now,
            updated_at: now,
        };

        let product = self.product_repository.create(product).await?;
        tracing::info!(product_id = %product.id, "Product created");

        Ok(product)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.existing(id).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.product_repository.list_all().await
    }

    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let mut product = self.existing(id).await?;

        product.name = command.name;
        product.description = command.description;
        product.price = command.price;
        product.updated_at = Utc::now();

        self.product_repository.update(product).await
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError> {
        self.existing(id).await?;
        self.product_repository.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
