use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let products = state.product_service.list_products().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Products retrieved successfully",
        products.iter().map(ProductData::from).collect(),
    ))
}
