use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::snapshot::{self, CART_STORAGE_KEY};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

/// The owned cart shared by all cart use cases, mirrored to key-value storage.
///
/// Mutations hold `cart` for the whole operation. Readers only see
/// `published`, which is replaced after each commit.
pub struct CartState {
    cart: Mutex<Cart>,
    published: RwLock<Cart>,
    storage: Arc<dyn KeyValueStorage>,
}

impl CartState {
    pub fn new(cart: Cart, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            published: RwLock::new(cart.clone()),
            cart: Mutex::new(cart),
            storage,
        }
    }

    /// Loads the persisted snapshot. A missing, unreadable or unparsable
    /// snapshot starts an empty cart.
    pub async fn restore(storage: Arc<dyn KeyValueStorage>, logger: Arc<dyn Logger>) -> Self {
        let cart = match storage.get_item(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(cart) => {
                    logger.info(&format!("Cart restored with {} item(s)", cart.len()));
                    cart
                }
                Err(err) => {
                    logger.warn(&format!("Discarding unparsable cart snapshot: {}", err));
                    Cart::new()
                }
            },
            Ok(None) => {
                logger.info("No cart snapshot found, starting empty");
                Cart::new()
            }
            Err(err) => {
                logger.error(&format!("Failed to read cart snapshot: {}", err));
                Cart::new()
            }
        };

        Self::new(cart, storage)
    }

    /// Copy of the last committed cart. Does not wait for a running operation.
    pub async fn snapshot(&self) -> Cart {
        self.published.read().await.clone()
    }

    /// Exclusive access for the duration of one operation.
    pub async fn lock(&self) -> CartGuard<'_> {
        CartGuard {
            cart: self.cart.lock().await,
            published: &self.published,
            storage: self.storage.as_ref(),
        }
    }
}

pub struct CartGuard<'a> {
    cart: MutexGuard<'a, Cart>,
    published: &'a RwLock<Cart>,
    storage: &'a dyn KeyValueStorage,
}

impl CartGuard<'_> {
    pub fn current(&self) -> &Cart {
        &self.cart
    }

    /// Persists `next` and only then makes it the current cart.
    pub async fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        let raw = snapshot::encode(&next)?;
        self.storage.set_item(CART_STORAGE_KEY, &raw).await?;
        *self.published.write().await = next.clone();
        *self.cart = next;
        Ok(())
    }
}
