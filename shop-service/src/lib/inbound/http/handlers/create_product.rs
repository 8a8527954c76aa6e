use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::CreateProductCommand;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let Json(body) = body?;

    state
        .product_service
        .create_product(body.try_into_create_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| {
            ApiSuccess::new(StatusCode::CREATED, "Product created successfully", product.into())
        })
}

/// HTTP request body shared by product create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) price: f64,
}

impl ProductRequest {
    fn try_into_create_command(self) -> Result<CreateProductCommand, ProductError> {
        CreateProductCommand::new(self.name, self.description, self.price)
    }
}
