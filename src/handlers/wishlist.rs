use crate::handlers::common::{error_response, map_service_error, success_response};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post},
    Router,
};
use serde_json::json;
use std::sync::Arc;

/// Creates the router for wishlist endpoints.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/:customer_id", get(get_wishlist))
        .route("/:customer_id/items/:item_id", post(add_to_wishlist))
        .route("/:customer_id/items/:item_id", delete(remove_from_wishlist))
        .route(
            "/:customer_id/items/:item_id/transfer-to-cart",
            post(transfer_to_cart),
        )
}

/// Get the enriched wishlist for a customer.
#[utoipa::path(
    get,
    path = "/api/v1/wishlist/{customer_id}",
    params(("customer_id" = i64, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Wishlisted items with details"),
        (status = 404, description = "Wishlist is empty")
    ),
    tag = "wishlist"
)]
pub(crate) async fn get_wishlist(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> Result<Response, ApiError> {
    let items = state
        .services
        .wishlist
        .list_enriched(customer_id)
        .await
        .map_err(map_service_error)?;

    if items.is_empty() {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            "No items found in wishlist.",
        ))
    } else {
        Ok(success_response("Items retrieved successfully.", items))
    }
}

/// Add an item to the wishlist.
#[utoipa::path(
    post,
    path = "/api/v1/wishlist/{customer_id}/items/{item_id}",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier"),
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item added to wishlist"),
        (status = 409, description = "Item already wishlisted")
    ),
    tag = "wishlist"
)]
pub(crate) async fn add_to_wishlist(
    State(state): State<Arc<AppState>>,
    Path((customer_id, item_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    let added = state
        .services
        .wishlist
        .add_item(customer_id, item_id)
        .await
        .map_err(map_service_error)?;

    if added {
        Ok(success_response(
            "Item added to wishlist.",
            json!({ "customer_id": customer_id, "item_id": item_id }),
        ))
    } else {
        Ok(error_response(
            StatusCode::CONFLICT,
            "Item already in wishlist.",
        ))
    }
}

/// Remove an item from the wishlist.
#[utoipa::path(
    delete,
    path = "/api/v1/wishlist/{customer_id}/items/{item_id}",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier"),
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item removed from wishlist"),
        (status = 404, description = "Item not wishlisted")
    ),
    tag = "wishlist"
)]
pub(crate) async fn remove_from_wishlist(
    State(state): State<Arc<AppState>>,
    Path((customer_id, item_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    let removed = state
        .services
        .wishlist
        .remove_item(customer_id, item_id)
        .await
        .map_err(map_service_error)?;

    if removed {
        Ok(success_response(
            "Item removed from wishlist.",
            json!({ "customer_id": customer_id, "item_id": item_id }),
        ))
    } else {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            "Item not found in wishlist.",
        ))
    }
}

/// Move an item from the wishlist into the cart.
#[utoipa::path(
    post,
    path = "/api/v1/wishlist/{customer_id}/items/{item_id}/transfer-to-cart",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier"),
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item transferred to cart"),
        (status = 404, description = "Item not wishlisted")
    ),
    tag = "wishlist"
)]
pub(crate) async fn transfer_to_cart(
    State(state): State<Arc<AppState>>,
    Path((customer_id, item_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    let transferred = state
        .services
        .transfer
        .to_cart(customer_id, item_id)
        .await
        .map_err(map_service_error)?;

    if transferred {
        Ok(success_response(
            "Item transferred from wishlist to cart.",
            json!({ "customer_id": customer_id, "item_id": item_id }),
        ))
    } else {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            "Item not found in wishlist.",
        ))
    }
}
