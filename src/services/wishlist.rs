use crate::catalog::{CatalogClient, ItemDetail};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::store::ItemStore;
use tracing::{info, instrument};

/// Wishlist engine: membership adds and removals plus enriched listings.
/// No quantities anywhere; a wishlist entry either exists or it does not.
#[derive(Clone)]
pub struct WishlistService {
    store: ItemStore,
    catalog: CatalogClient,
    events: EventSender,
}

impl WishlistService {
    pub fn new(store: ItemStore, catalog: CatalogClient, events: EventSender) -> Self {
        Self {
            store,
            catalog,
            events,
        }
    }

    /// Adds an item to the wishlist. Duplicate adds are not an error, they
    /// are a `false`: the unique-key conflict from the store comes back as
    /// "did not add".
    #[instrument(skip(self))]
    pub async fn add_item(&self, customer_id: i64, item_id: i64) -> Result<bool, ServiceError> {
        let added = self
            .store
            .insert_wishlist(self.store.connection(), customer_id, item_id)
            .await?;

        if added {
            self.events
                .send_or_log(Event::WishlistItemAdded {
                    customer_id,
                    item_id,
                })
                .await;
            info!(
                "Added item {} to wishlist of customer {}",
                item_id, customer_id
            );
        }
        Ok(added)
    }

    /// Removes a wishlist entry. False when it did not exist.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, customer_id: i64, item_id: i64) -> Result<bool, ServiceError> {
        let removed = self
            .store
            .delete_wishlist_item(self.store.connection(), customer_id, item_id)
            .await?;

        if removed {
            self.events
                .send_or_log(Event::WishlistItemRemoved {
                    customer_id,
                    item_id,
                })
                .await;
        }
        Ok(removed)
    }

    /// Lists the wishlist with catalog enrichment. An empty wishlist is an
    /// empty list, there is no sentinel here (unlike the cart listing).
    #[instrument(skip(self))]
    pub async fn list_enriched(&self, customer_id: i64) -> Result<Vec<ItemDetail>, ServiceError> {
        let rows = self
            .store
            .list_wishlist(self.store.connection(), customer_id)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let item_ids: Vec<i64> = rows.iter().map(|row| row.item_id).collect();
        Ok(self.catalog.fetch_details(&item_ids).await)
    }
}
