use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::{CartGuard, CartState};
use crate::domain::cart::errors::{CartError, CartOperation};
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::services::{CatalogSource, StockOracle};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::ProductId;

pub struct AddProductUseCaseImpl {
    pub state: Arc<CartState>,
    pub stock_oracle: Arc<dyn StockOracle>,
    pub catalog: Arc<dyn CatalogSource>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl AddProductUseCaseImpl {
    async fn add(&self, guard: &mut CartGuard<'_>, product_id: ProductId) -> Result<(), CartError> {
        let stock = self.stock_oracle.get_stock(product_id).await?;
        let mut next = guard.current().clone();

        match next.find(product_id).map(|item| item.amount) {
            Some(current) => {
                let new_amount = current.checked_add(1).ok_or(CartError::OutOfStock)?;
                if new_amount > stock.amount {
                    return Err(CartError::OutOfStock);
                }
                next.set_amount(product_id, new_amount)?;
            }
            None => {
                if stock.amount < 1 {
                    return Err(CartError::OutOfStock);
                }
                let details = self.catalog.get_product(product_id).await?;
                if details.id != product_id {
                    return Err(CartError::Transport(ServiceError::MalformedResponse));
                }
                next.push(CartItem::new(details))?;
            }
        }

        guard.commit(next).await
    }
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Cart {
        self.logger
            .info(&format!("Adding product to cart: {}", params.product_id));

        let mut guard = self.state.lock().await;
        match self.add(&mut guard, params.product_id).await {
            Ok(()) => self
                .logger
                .info(&format!("Product added to cart: {}", params.product_id)),
            Err(err) => {
                self.logger.warn(&format!(
                    "Failed to add product {}: {}",
                    params.product_id, err
                ));
                self.notifier
                    .report_error(err.user_message(CartOperation::AddProduct));
            }
        }

        guard.current().clone()
    }
}
