use crate::handlers::common::{error_response, map_service_error, success_response};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::json;
use std::sync::Arc;

/// Creates the router for cart endpoints.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/:customer_id", get(get_cart))
        .route("/:customer_id", delete(clear_cart))
        .route("/:customer_id/items/:item_id", post(add_to_cart))
        .route("/:customer_id/items/:item_id", delete(remove_from_cart))
        .route(
            "/:customer_id/items/:item_id/quantity/:quantity",
            put(update_quantity),
        )
        .route(
            "/:customer_id/items/:item_id/transfer-to-wishlist",
            post(transfer_to_wishlist),
        )
}

/// Get the enriched cart for a customer.
#[utoipa::path(
    get,
    path = "/api/v1/cart/{customer_id}",
    params(("customer_id" = i64, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Cart contents with quantities and item details"),
        (status = 404, description = "Cart is empty")
    ),
    tag = "cart"
)]
pub(crate) async fn get_cart(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> Result<Response, ApiError> {
    let cart = state
        .services
        .cart
        .list_enriched(customer_id)
        .await
        .map_err(map_service_error)?;

    match cart {
        Some(cart) => Ok(success_response("Items found in the cart.", cart)),
        None => Ok(error_response(
            StatusCode::NOT_FOUND,
            "No items found in the cart.",
        )),
    }
}

/// Add one unit of an item to the cart (increment-or-insert).
#[utoipa::path(
    post,
    path = "/api/v1/cart/{customer_id}/items/{item_id}",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier"),
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item added to cart"),
        (status = 400, description = "Add failed")
    ),
    tag = "cart"
)]
pub(crate) async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    Path((customer_id, item_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    let added = state
        .services
        .cart
        .add_item(customer_id, item_id)
        .await
        .map_err(map_service_error)?;

    if added {
        Ok(success_response(
            "Item added to cart.",
            json!({ "customer_id": customer_id, "item_id": item_id }),
        ))
    } else {
        Ok(error_response(
            StatusCode::BAD_REQUEST,
            "Failed to add item to cart.",
        ))
    }
}

/// Remove a whole cart line, regardless of quantity.
#[utoipa::path(
    delete,
    path = "/api/v1/cart/{customer_id}/items/{item_id}",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier"),
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item removed from cart"),
        (status = 404, description = "Item not in cart")
    ),
    tag = "cart"
)]
pub(crate) async fn remove_from_cart(
    State(state): State<Arc<AppState>>,
    Path((customer_id, item_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    let removed = state
        .services
        .cart
        .remove_item(customer_id, item_id)
        .await
        .map_err(map_service_error)?;

    if removed {
        Ok(success_response(
            "Item removed from cart.",
            json!({ "customer_id": customer_id, "item_id": item_id }),
        ))
    } else {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            "Item not found in cart.",
        ))
    }
}

/// Overwrite the quantity of an existing cart line.
#[utoipa::path(
    put,
    path = "/api/v1/cart/{customer_id}/items/{item_id}/quantity/{quantity}",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier"),
        ("item_id" = i64, Path, description = "Item identifier"),
        ("quantity" = i32, Path, description = "New quantity, must be at least 1")
    ),
    responses(
        (status = 200, description = "Quantity updated"),
        (status = 400, description = "Non-positive quantity"),
        (status = 404, description = "Item not in cart")
    ),
    tag = "cart"
)]
pub(crate) async fn update_quantity(
    State(state): State<Arc<AppState>>,
    Path((customer_id, item_id, quantity)): Path<(i64, i64, i32)>,
) -> Result<Response, ApiError> {
    // Engines never see non-positive quantities; rejected here at the boundary.
    if quantity <= 0 {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "Invalid quantity. Quantity must be greater than 0.",
        ));
    }

    let updated = state
        .services
        .cart
        .set_quantity(customer_id, item_id, quantity)
        .await
        .map_err(map_service_error)?;

    if updated {
        Ok(success_response(
            "Cart updated successfully.",
            json!({ "customer_id": customer_id, "item_id": item_id, "quantity": quantity }),
        ))
    } else {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            "Item not found in cart.",
        ))
    }
}

/// Remove every cart line for a customer.
#[utoipa::path(
    delete,
    path = "/api/v1/cart/{customer_id}",
    params(("customer_id" = i64, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Cart cleared"),
        (status = 404, description = "Cart was already empty")
    ),
    tag = "cart"
)]
pub(crate) async fn clear_cart(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> Result<Response, ApiError> {
    let cleared = state
        .services
        .cart
        .clear(customer_id)
        .await
        .map_err(map_service_error)?;

    if cleared {
        Ok(success_response(
            "All items removed from cart.",
            json!({ "customer_id": customer_id }),
        ))
    } else {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            "No items found in cart.",
        ))
    }
}

/// Move an item from the cart into the wishlist.
#[utoipa::path(
    post,
    path = "/api/v1/cart/{customer_id}/items/{item_id}/transfer-to-wishlist",
    params(
        ("customer_id" = i64, Path, description = "Customer identifier"),
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item transferred to wishlist"),
        (status = 404, description = "Item not in cart or already wishlisted")
    ),
    tag = "cart"
)]
pub(crate) async fn transfer_to_wishlist(
    State(state): State<Arc<AppState>>,
    Path((customer_id, item_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    let transferred = state
        .services
        .transfer
        .to_wishlist(customer_id, item_id)
        .await
        .map_err(map_service_error)?;

    if transferred {
        Ok(success_response(
            "Item transferred from cart to wishlist.",
            json!({ "customer_id": customer_id, "item_id": item_id }),
        ))
    } else {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            "Item not found in cart or already in wishlist.",
        ))
    }
}
