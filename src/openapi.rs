use crate::handlers;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cart & Wishlist API",
        description = "Per-customer cart and wishlist collections with catalog enrichment and cross-collection transfers"
    ),
    paths(
        handlers::cart::get_cart,
        handlers::cart::add_to_cart,
        handlers::cart::remove_from_cart,
        handlers::cart::update_quantity,
        handlers::cart::clear_cart,
        handlers::cart::transfer_to_wishlist,
        handlers::wishlist::get_wishlist,
        handlers::wishlist::add_to_wishlist,
        handlers::wishlist::remove_from_wishlist,
        handlers::wishlist::transfer_to_cart,
    ),
    tags(
        (name = "cart", description = "Shopping cart operations"),
        (name = "wishlist", description = "Wishlist operations")
    )
)]
pub struct ApiDoc;

/// Swagger UI router, mounted alongside the API.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
