pub mod cart;
pub mod common;
pub mod wishlist;

use crate::catalog::CatalogClient;
use crate::events::EventSender;
use crate::services::{CartService, TransferService, WishlistService};
use crate::store::ItemStore;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub use common::{ApiResponse, ResponseStatus};

/// Services used by the HTTP handlers.
///
/// Both engines get the same leaf dependencies (store and catalog client);
/// only the transfer coordinator may touch both tables.
#[derive(Clone)]
pub struct AppServices {
    pub cart: CartService,
    pub wishlist: WishlistService,
    pub transfer: TransferService,
}

impl AppServices {
    pub fn new(
        db: Arc<DatabaseConnection>,
        event_sender: EventSender,
        catalog: CatalogClient,
    ) -> Self {
        let store = ItemStore::new(db);

        Self {
            cart: CartService::new(store.clone(), catalog.clone(), event_sender.clone()),
            wishlist: WishlistService::new(store.clone(), catalog, event_sender.clone()),
            transfer: TransferService::new(store, event_sender),
        }
    }
}
