use crate::catalog::{CatalogClient, ItemDetail};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::store::ItemStore;
use serde::Serialize;
use tracing::{info, instrument};

/// Shopping cart engine.
///
/// Owns all cart semantics: increment-or-insert adds, whole-line removal,
/// bulk clear, explicit quantity updates and catalog-enriched listings.
/// Cross-collection moves live in [`crate::services::TransferService`]; this
/// engine never touches the wishlist table.
///
/// Row-absent and row-present outcomes surface as booleans, matching the
/// public operation contract; only infrastructure failures become errors.
#[derive(Clone)]
pub struct CartService {
    store: ItemStore,
    catalog: CatalogClient,
    events: EventSender,
}

/// Enriched cart listing: `quantities[i]` belongs to `items[i]`.
///
/// The two sequences are parallel by construction; both come from the same
/// store query in the same iteration order. When enrichment is degraded,
/// `items` is the single-element placeholder list and the correspondence is
/// intentionally broken while quantities stay authoritative.
#[derive(Debug, Serialize)]
pub struct EnrichedCart {
    pub quantities: Vec<i32>,
    pub items: Vec<ItemDetail>,
}

impl CartService {
    pub fn new(store: ItemStore, catalog: CatalogClient, events: EventSender) -> Self {
        Self {
            store,
            catalog,
            events,
        }
    }

    /// Adds one unit of an item to the cart.
    ///
    /// If the line already exists its quantity is incremented by one,
    /// otherwise a new line is inserted at quantity 1. The read and the write
    /// run in one transaction so concurrent adds cannot lose an increment.
    #[instrument(skip(self))]
    pub async fn add_item(&self, customer_id: i64, item_id: i64) -> Result<bool, ServiceError> {
        let txn = self.store.begin().await?;
        let added = self
            .store
            .add_or_increment_cart(&txn, customer_id, item_id)
            .await?;
        txn.commit().await?;

        if added {
            self.events
                .send_or_log(Event::CartItemAdded {
                    customer_id,
                    item_id,
                })
                .await;
            info!("Added item {} to cart of customer {}", item_id, customer_id);
        }
        Ok(added)
    }

    /// Removes a whole cart line regardless of its quantity.
    ///
    /// Returns false when the line does not exist. This is deliberately
    /// "remove line item", not "remove one unit"; decrementing goes through
    /// [`CartService::set_quantity`].
    #[instrument(skip(self))]
    pub async fn remove_item(&self, customer_id: i64, item_id: i64) -> Result<bool, ServiceError> {
        let txn = self.store.begin().await?;
        if !self.store.in_cart(&txn, customer_id, item_id).await? {
            return Ok(false);
        }

        let removed = self
            .store
            .delete_cart_item(&txn, customer_id, item_id)
            .await?;
        txn.commit().await?;

        if removed {
            self.events
                .send_or_log(Event::CartItemRemoved {
                    customer_id,
                    item_id,
                })
                .await;
        }
        Ok(removed)
    }

    /// Deletes every cart line for the customer. False when the cart was
    /// already empty.
    #[instrument(skip(self))]
    pub async fn clear(&self, customer_id: i64) -> Result<bool, ServiceError> {
        let cleared = self
            .store
            .clear_cart(self.store.connection(), customer_id)
            .await?;

        if cleared {
            self.events
                .send_or_log(Event::CartCleared { customer_id })
                .await;
            info!("Cleared cart of customer {}", customer_id);
        }
        Ok(cleared)
    }

    /// Overwrites the stored quantity of an existing line.
    ///
    /// The boundary rejects non-positive quantities before this is called;
    /// the engine itself only reports whether a row was updated. False means
    /// the line does not exist, nothing is inserted.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        customer_id: i64,
        item_id: i64,
        quantity: i32,
    ) -> Result<bool, ServiceError> {
        let updated = self
            .store
            .set_cart_quantity(self.store.connection(), customer_id, item_id, quantity)
            .await?;

        if updated {
            self.events
                .send_or_log(Event::CartQuantityUpdated {
                    customer_id,
                    item_id,
                    quantity,
                })
                .await;
        }
        Ok(updated)
    }

    /// Lists the cart with catalog enrichment.
    ///
    /// `None` is the empty-cart sentinel; the catalog is not called at all in
    /// that case. A catalog outage degrades `items` to the placeholder list
    /// while the quantities remain correct.
    #[instrument(skip(self))]
    pub async fn list_enriched(
        &self,
        customer_id: i64,
    ) -> Result<Option<EnrichedCart>, ServiceError> {
        let rows = self
            .store
            .list_cart(self.store.connection(), customer_id)
            .await?;

        if rows.is_empty() {
            return Ok(None);
        }

        let (item_ids, quantities): (Vec<i64>, Vec<i32>) =
            rows.iter().map(|row| (row.item_id, row.quantity)).unzip();

        let items = self.catalog.fetch_details(&item_ids).await;

        Ok(Some(EnrichedCart { quantities, items }))
    }
}
