use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_cart::errors::ShoppingCartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingCartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ShoppingCartError::NotFound | ShoppingCartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ShoppingCartError::InvalidQuantity => (StatusCode::BAD_REQUEST, "ValidationError"),
            ShoppingCartError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
