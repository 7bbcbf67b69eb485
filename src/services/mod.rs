pub mod cart;
pub mod transfer;
pub mod wishlist;

pub use cart::{CartService, EnrichedCart};
pub use transfer::TransferService;
pub use wishlist::WishlistService;
