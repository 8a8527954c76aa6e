use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_product::ProductRequest;
use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;
    let Json(body) = body?;
    let command = UpdateProductCommand::new(body.name, body.description, body.price)?;

    state
        .product_service
        .update_product(&product_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref product| {
            ApiSuccess::new(StatusCode::OK, "Product updated successfully", product.into())
        })
}
