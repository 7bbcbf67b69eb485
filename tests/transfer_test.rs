mod common;

use cart_wishlist_api::entities::{CartItem, WishlistItem};
use common::TestApp;
use sea_orm::EntityTrait;

#[tokio::test]
async fn cart_to_wishlist_moves_the_item_and_discards_quantity() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    services.cart.add_item(7, 101).await.unwrap();
    services.cart.set_quantity(7, 101, 3).await.unwrap();

    let transferred = services.transfer.to_wishlist(7, 101).await.unwrap();
    assert!(transferred);

    let cart_row = CartItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap();
    assert!(cart_row.is_none());

    let wishlist_row = WishlistItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap();
    assert!(wishlist_row.is_some());
}

#[tokio::test]
async fn cart_to_wishlist_is_a_noop_when_already_wishlisted() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    services.cart.add_item(7, 101).await.unwrap();
    services.wishlist.add_item(7, 101).await.unwrap();

    let transferred = services.transfer.to_wishlist(7, 101).await.unwrap();
    assert!(!transferred);

    // Cart is unchanged.
    let cart_row = CartItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap()
        .expect("cart row should remain");
    assert_eq!(cart_row.quantity, 1);
}

#[tokio::test]
async fn cart_to_wishlist_fails_when_item_not_in_cart() {
    let app = TestApp::new().await;

    let transferred = app.state.services.transfer.to_wishlist(7, 101).await.unwrap();
    assert!(!transferred);

    let rows = WishlistItem::find().all(&*app.state.db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn wishlist_to_cart_merges_into_existing_quantity() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    services.wishlist.add_item(7, 101).await.unwrap();
    services.cart.add_item(7, 101).await.unwrap();
    services.cart.set_quantity(7, 101, 2).await.unwrap();

    let transferred = services.transfer.to_cart(7, 101).await.unwrap();
    assert!(transferred);

    let cart_row = CartItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cart_row.quantity, 3);
}

#[tokio::test]
async fn wishlist_to_cart_inserts_at_quantity_one() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    services.wishlist.add_item(7, 101).await.unwrap();

    let transferred = services.transfer.to_cart(7, 101).await.unwrap();
    assert!(transferred);

    let cart_row = CartItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cart_row.quantity, 1);
}

#[tokio::test]
async fn wishlist_to_cart_fails_when_item_not_wishlisted() {
    let app = TestApp::new().await;

    let transferred = app.state.services.transfer.to_cart(7, 101).await.unwrap();
    assert!(!transferred);

    let rows = CartItem::find().all(&*app.state.db).await.unwrap();
    assert!(rows.is_empty());
}

/// Pins the documented dual-presence behavior: a wishlist-to-cart transfer
/// leaves the wishlist entry in place. See DESIGN.md before "fixing" this.
#[tokio::test]
async fn transfer_leaves_wishlist_entry_in_place() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    services.wishlist.add_item(7, 101).await.unwrap();
    services.transfer.to_cart(7, 101).await.unwrap();

    let wishlist_row = WishlistItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap();
    assert!(wishlist_row.is_some());
}

/// The full round-trip scenario: add twice, move to wishlist, move back.
#[tokio::test]
async fn cart_wishlist_round_trip_scenario() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    // Add item 101 twice: one row at quantity 2.
    services.cart.add_item(7, 101).await.unwrap();
    services.cart.add_item(7, 101).await.unwrap();
    let row = CartItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.quantity, 2);

    // Transfer to wishlist: cart empty, wishlist has the item.
    assert!(services.transfer.to_wishlist(7, 101).await.unwrap());
    assert!(CartItem::find().all(&*app.state.db).await.unwrap().is_empty());
    assert!(WishlistItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap()
        .is_some());

    // Transfer back: cart has quantity 1, wishlist entry remains.
    assert!(services.transfer.to_cart(7, 101).await.unwrap());
    let row = CartItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.quantity, 1);
    assert!(WishlistItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap()
        .is_some());
}
