use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::store::ItemStore;
use tracing::{info, instrument};

/// Coordinates moving an item between cart and wishlist for one customer.
///
/// This is the only module allowed to look at both tables. Each transfer runs
/// in a single transaction, so a concurrent request on the same
/// (customer, item) pair cannot interleave between the checks and the
/// mutations. Failed transfers roll back and leave both collections as they
/// were.
#[derive(Clone)]
pub struct TransferService {
    store: ItemStore,
    events: EventSender,
}

impl TransferService {
    pub fn new(store: ItemStore, events: EventSender) -> Self {
        Self { store, events }
    }

    /// Moves an item from the cart to the wishlist.
    ///
    /// False when the item is already wishlisted, or not in the cart. On
    /// success the cart line is gone and its quantity is discarded; the
    /// wishlist has no quantity concept.
    #[instrument(skip(self))]
    pub async fn to_wishlist(&self, customer_id: i64, item_id: i64) -> Result<bool, ServiceError> {
        let txn = self.store.begin().await?;

        if self.store.in_wishlist(&txn, customer_id, item_id).await? {
            return Ok(false);
        }
        if !self.store.in_cart(&txn, customer_id, item_id).await? {
            return Ok(false);
        }
        if !self
            .store
            .delete_cart_item(&txn, customer_id, item_id)
            .await?
        {
            return Ok(false);
        }
        if !self.store.insert_wishlist(&txn, customer_id, item_id).await? {
            // Dropping the transaction rolls the cart deletion back.
            return Ok(false);
        }

        txn.commit().await?;

        self.events
            .send_or_log(Event::TransferredToWishlist {
                customer_id,
                item_id,
            })
            .await;
        info!(
            "Transferred item {} from cart to wishlist for customer {}",
            item_id, customer_id
        );
        Ok(true)
    }

    /// Moves an item from the wishlist into the cart.
    ///
    /// False when the item is not wishlisted. If the cart already has the
    /// item, its quantity is merged up by one; otherwise a new line is
    /// inserted at quantity 1.
    ///
    /// The wishlist entry is deliberately left in place, so after a
    /// successful transfer the item exists in both collections. That matches
    /// the system this one replaces; see DESIGN.md before changing it, the
    /// wishlist may be intended as a persistent want-list.
    #[instrument(skip(self))]
    pub async fn to_cart(&self, customer_id: i64, item_id: i64) -> Result<bool, ServiceError> {
        let txn = self.store.begin().await?;

        if !self.store.in_wishlist(&txn, customer_id, item_id).await? {
            return Ok(false);
        }

        let existing = self.store.cart_quantity(&txn, customer_id, item_id).await?;
        let merged = if existing > 0 {
            self.store
                .set_cart_quantity(&txn, customer_id, item_id, existing + 1)
                .await?
        } else {
            self.store.insert_cart(&txn, customer_id, item_id, 1).await?;
            true
        };

        if !merged {
            return Ok(false);
        }

        txn.commit().await?;

        self.events
            .send_or_log(Event::TransferredToCart {
                customer_id,
                item_id,
            })
            .await;
        info!(
            "Transferred item {} from wishlist to cart for customer {}",
            item_id, customer_id
        );
        Ok(true)
    }
}
