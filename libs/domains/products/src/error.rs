use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{ToResponse, ToSchema};

use crate::models::ProductId;

/// Body of every product 404.
pub const NOT_FOUND_MESSAGE: &str = "Producto no encontrado";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotFoundBody {
    pub error: String,
}

#[derive(ToResponse)]
#[response(
    description = "Product not found",
    content_type = "application/json",
    example = json!({ "error": "Producto no encontrado" })
)]
pub struct ProductNotFoundResponse(pub NotFoundBody);

/// 404s carry the fixed product body; database failures use the shared
/// [`AppError`] envelope.
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                let body = NotFoundBody {
                    error: NOT_FOUND_MESSAGE.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ProductError::Database(e) => AppError::Database(e).into_response(),
        }
    }
}
