use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::deadline::with_deadline;
use super::deadline::StoreFailure;
use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDescription;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::ports::ProductRepository;
use crate::product::errors::ProductError;

pub struct PostgresProductRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn row_to_product(row: PgRow) -> Result<Product, ProductError> {
        Ok(Product {
            id: ProductId(row.try_get("id").map_err(database_error)?),
            name: ProductName::new(row.try_get("name").map_err(database_error)?)?,
            description: ProductDescription::new(
                row.try_get("description").map_err(database_error)?,
            )?,
            price: Price::new(row.try_get("price").map_err(database_error)?)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
            updated_at: row.try_get("updated_at").map_err(database_error)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> ProductError {
    ProductError::DatabaseError(e.to_string())
}

fn store_error(failure: StoreFailure) -> ProductError {
    ProductError::DatabaseError(failure.to_string())
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        let query = sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.id.0)
        .bind(product.name.as_str())
        .bind(product.description.as_str())
        .bind(product.price.value())
        .bind(product.created_at)
        .bind(product.updated_at);

        with_deadline(self.query_timeout, query.execute(&self.pool))
            .await
            .map_err(store_error)?;

        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let query = sqlx::query(
            r#"
            SELECT id, name, description, price, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0);

        let row = with_deadline(self.query_timeout, query.fetch_optional(&self.pool))
            .await
            .map_err(store_error)?;

        row.map(Self::row_to_product).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let query = sqlx::query(
            r#"
            SELECT id, name, description, price, created_at, updated_at
            FROM products
            ORDER BY created_at ASC, id ASC
            "#,
        );

        let rows = with_deadline(self.query_timeout, query.fetch_all(&self.pool))
            .await
            .map_err(store_error)?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let query = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(product.id.0)
        .bind(product.name.as_str())
        .bind(product.description.as_str())
        .bind(product.price.value())
        .bind(product.updated_at);

        let result = with_deadline(self.query_timeout, query.execute(&self.pool))
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let query = sqlx::query("DELETE FROM products WHERE id = $1").bind(id.0);

        let result = with_deadline(self.query_timeout, query.execute(&self.pool))
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
