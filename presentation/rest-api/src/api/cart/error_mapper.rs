use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::QuantityNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.quantity_not_positive",
            ),
            CartError::BookNotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.book_not_found"),
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found"),
            CartError::Repository(err) => {
                tracing::error!("Cart operation failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
