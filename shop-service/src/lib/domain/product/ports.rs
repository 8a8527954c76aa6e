use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;

/// Port for product catalog operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a product from validated fields.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// Retrieve every product, oldest first. Empty when the catalog is empty.
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Replace name, description and price of an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Delete an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for the product aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn create(&self, product: Product) -> Result<Product, ProductError>;

    /// Optional product entity (None if not found)
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
