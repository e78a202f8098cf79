use serde::{Deserialize, Serialize};

use super::model::{Cart, CartItem};
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

/// Storage key under which the cart snapshot lives.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Serialize, Deserialize)]
struct CartItemSnapshot {
    id: ProductId,
    title: String,
    price: f64,
    image: String,
    amount: u32,
}

impl CartItemSnapshot {
    fn from_domain(item: &CartItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            price: item.price,
            image: item.image.clone(),
            amount: item.amount,
        }
    }

    fn into_domain(self) -> CartItem {
        CartItem::from_repository(self.id, self.title, self.price, self.image, self.amount)
    }
}

/// Serializes the cart as a JSON array of lines.
pub fn encode(cart: &Cart) -> Result<String, RepositoryError> {
    let items: Vec<CartItemSnapshot> = cart
        .items()
        .iter()
        .map(CartItemSnapshot::from_domain)
        .collect();
    serde_json::to_string(&items).map_err(|_| RepositoryError::Serialization)
}

/// Parses a stored snapshot. Snapshots that break cart invariants are rejected.
pub fn decode(raw: &str) -> Result<Cart, RepositoryError> {
    let items: Vec<CartItemSnapshot> =
        serde_json::from_str(raw).map_err(|_| RepositoryError::Serialization)?;
    Cart::from_items(items.into_iter().map(CartItemSnapshot::into_domain).collect())
        .map_err(|_| RepositoryError::Serialization)
}
