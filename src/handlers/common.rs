use crate::errors::{ApiError, ServiceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Outcome discriminator of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The success/failure envelope every endpoint returns: a status, a
/// human-readable message and an optional payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
        }
    }
}

/// 200 envelope with payload.
pub fn success_response<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(message, data))).into_response()
}

/// Error envelope with an explicit status code.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse::<serde_json::Value>::error(message)),
    )
        .into_response()
}

/// Map service errors to API errors.
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_serializes_with_data() {
        let body = ApiResponse::success("Item added to cart.", json!({"item_id": 101}));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "status": "success",
                "message": "Item added to cart.",
                "data": {"item_id": 101}
            })
        );
    }

    #[test]
    fn error_envelope_omits_data() {
        let body = ApiResponse::<serde_json::Value>::error("Item not found in cart.");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "status": "error",
                "message": "Item not found in cart."
            })
        );
    }
}
