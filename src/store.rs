use crate::entities::{cart_item, wishlist_item, CartItem, WishlistItem};
use crate::errors::ServiceError;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use sea_orm::sea_query::Expr;
use std::sync::Arc;

/// Persistence layer for the cart and wishlist tables.
///
/// This is the only module that issues SQL. Both engines and the transfer
/// coordinator receive the same store instance; neither engine reaches the
/// other's table except through [`crate::services::TransferService`].
///
/// Row operations are generic over [`ConnectionTrait`] so multi-statement
/// engine operations can run every step inside one transaction obtained from
/// [`ItemStore::begin`]. Single-statement callers pass
/// [`ItemStore::connection`] directly.
#[derive(Clone)]
pub struct ItemStore {
    db: Arc<DatabaseConnection>,
}

impl ItemStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// The underlying pool, for single-statement operations.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Starts a transaction for a multi-statement operation.
    pub async fn begin(&self) -> Result<DatabaseTransaction, ServiceError> {
        Ok(self.db.begin().await?)
    }

    /// All cart rows for a customer, ordered by item id. The enriched-listing
    /// path relies on a single query here so quantities and item ids stay in
    /// the same iteration order.
    pub async fn list_cart<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
    ) -> Result<Vec<cart_item::Model>, ServiceError> {
        Ok(CartItem::find()
            .filter(cart_item::Column::CustomerId.eq(customer_id))
            .order_by_asc(cart_item::Column::ItemId)
            .all(conn)
            .await?)
    }

    /// All wishlisted item ids for a customer, ordered by item id.
    pub async fn list_wishlist<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
    ) -> Result<Vec<wishlist_item::Model>, ServiceError> {
        Ok(WishlistItem::find()
            .filter(wishlist_item::Column::CustomerId.eq(customer_id))
            .order_by_asc(wishlist_item::Column::ItemId)
            .all(conn)
            .await?)
    }

    /// Stored cart quantity, 0 when the row is absent.
    pub async fn cart_quantity<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
    ) -> Result<i32, ServiceError> {
        Ok(CartItem::find_by_id((customer_id, item_id))
            .one(conn)
            .await?
            .map(|row| row.quantity)
            .unwrap_or(0))
    }

    pub async fn in_cart<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
    ) -> Result<bool, ServiceError> {
        Ok(CartItem::find_by_id((customer_id, item_id))
            .one(conn)
            .await?
            .is_some())
    }

    pub async fn in_wishlist<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
    ) -> Result<bool, ServiceError> {
        Ok(WishlistItem::find_by_id((customer_id, item_id))
            .one(conn)
            .await?
            .is_some())
    }

    /// Increment-or-insert: bumps the quantity by one when the line exists,
    /// otherwise inserts it at quantity 1. Callers run this inside a
    /// transaction; the read and the write are separate statements.
    pub async fn add_or_increment_cart<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
    ) -> Result<bool, ServiceError> {
        match CartItem::find_by_id((customer_id, item_id)).one(conn).await? {
            Some(row) => {
                let quantity = row.quantity + 1;
                let mut active: cart_item::ActiveModel = row.into();
                active.quantity = Set(quantity);
                active.updated_at = Set(Utc::now());
                active.update(conn).await?;
                Ok(true)
            }
            None => {
                self.insert_cart(conn, customer_id, item_id, 1).await?;
                Ok(true)
            }
        }
    }

    /// Inserts a new cart line at an explicit quantity.
    pub async fn insert_cart<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
        quantity: i32,
    ) -> Result<(), ServiceError> {
        let now = Utc::now();
        cart_item::ActiveModel {
            customer_id: Set(customer_id),
            item_id: Set(item_id),
            quantity: Set(quantity),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await?;
        Ok(())
    }

    /// Overwrites the stored quantity. Returns false when the row is absent
    /// (zero rows affected), without inserting.
    pub async fn set_cart_quantity<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
        quantity: i32,
    ) -> Result<bool, ServiceError> {
        let result = CartItem::update_many()
            .col_expr(cart_item::Column::Quantity, Expr::value(quantity))
            .col_expr(cart_item::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(cart_item::Column::CustomerId.eq(customer_id))
            .filter(cart_item::Column::ItemId.eq(item_id))
            .exec(conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes one cart line. False when it did not exist.
    pub async fn delete_cart_item<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
    ) -> Result<bool, ServiceError> {
        let result = CartItem::delete_by_id((customer_id, item_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Deletes every cart line for a customer. False when there were none.
    pub async fn clear_cart<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
    ) -> Result<bool, ServiceError> {
        let result = CartItem::delete_many()
            .filter(cart_item::Column::CustomerId.eq(customer_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Inserts a wishlist entry. A composite-key conflict means the item was
    /// already wishlisted and comes back as `Ok(false)`, not an error.
    pub async fn insert_wishlist<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
    ) -> Result<bool, ServiceError> {
        let now = Utc::now();
        let entry = wishlist_item::ActiveModel {
            customer_id: Set(customer_id),
            item_id: Set(item_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match entry.insert(conn).await {
            Ok(_) => Ok(true),
            Err(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    Ok(false)
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Deletes one wishlist entry. False when it did not exist.
    pub async fn delete_wishlist_item<C: ConnectionTrait>(
        &self,
        conn: &C,
        customer_id: i64,
        item_id: i64,
    ) -> Result<bool, ServiceError> {
        let result = WishlistItem::delete_by_id((customer_id, item_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
