mod common;

use cart_wishlist_api::entities::WishlistItem;
use common::TestApp;
use sea_orm::EntityTrait;

#[tokio::test]
async fn add_inserts_a_membership_row() {
    let app = TestApp::new().await;

    let added = app
        .state
        .services
        .wishlist
        .add_item(7, 101)
        .await
        .expect("add should succeed");
    assert!(added);

    let row = WishlistItem::find_by_id((7, 101))
        .one(&*app.state.db)
        .await
        .unwrap();
    assert!(row.is_some());
}

#[tokio::test]
async fn duplicate_add_returns_false_not_an_error() {
    let app = TestApp::new().await;
    let wishlist = &app.state.services.wishlist;

    assert!(wishlist.add_item(7, 101).await.unwrap());
    assert!(!wishlist.add_item(7, 101).await.unwrap());

    let rows = WishlistItem::find().all(&*app.state.db).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn remove_returns_true_then_false() {
    let app = TestApp::new().await;
    let wishlist = &app.state.services.wishlist;

    wishlist.add_item(7, 101).await.unwrap();

    assert!(wishlist.remove_item(7, 101).await.unwrap());
    assert!(!wishlist.remove_item(7, 101).await.unwrap());
}

#[tokio::test]
async fn list_enriched_on_empty_wishlist_is_an_empty_list() {
    let app = TestApp::new().await;
    let items = app.state.services.wishlist.list_enriched(7).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn catalog_outage_degrades_listing_to_placeholder() {
    let app = TestApp::new().await;
    let wishlist = &app.state.services.wishlist;

    wishlist.add_item(7, 101).await.unwrap();
    wishlist.add_item(7, 102).await.unwrap();

    let items = wishlist.list_enriched(7).await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_placeholder());
}
