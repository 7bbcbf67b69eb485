pub mod cart_item;
pub mod wishlist_item;

pub use cart_item::Entity as CartItem;
pub use wishlist_item::Entity as WishlistItem;

pub type CartItemModel = cart_item::Model;
pub type WishlistItemModel = wishlist_item::Model;
