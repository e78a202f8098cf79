use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::{CartGuard, CartState};
use crate::domain::cart::errors::{CartError, CartOperation};
use crate::domain::cart::model::Cart;
use crate::domain::cart::services::StockOracle;
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductAmountUseCaseImpl {
    pub state: Arc<CartState>,
    pub stock_oracle: Arc<dyn StockOracle>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductAmountUseCaseImpl {
    async fn update(
        &self,
        guard: &mut CartGuard<'_>,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        let stock = self.stock_oracle.get_stock(product_id).await?;

        let requested = u32::try_from(amount).map_err(|_| CartError::OutOfStock)?;
        if stock.amount < requested {
            return Err(CartError::OutOfStock);
        }

        let mut next = guard.current().clone();
        if !next.set_amount(product_id, requested)? {
            self.logger
                .debug(&format!("Product {} not in cart, nothing to update", product_id));
            return Ok(());
        }

        guard.commit(next).await
    }
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Cart {
        if params.amount < 1 {
            self.logger.debug(&format!(
                "Ignoring amount {} for product {}",
                params.amount, params.product_id
            ));
            return self.state.snapshot().await;
        }

        self.logger.info(&format!(
            "Updating amount of product {} to {}",
            params.product_id, params.amount
        ));

        let mut guard = self.state.lock().await;
        match self
            .update(&mut guard, params.product_id, params.amount)
            .await
        {
            Ok(()) => self.logger.info(&format!(
                "Amount of product {} updated",
                params.product_id
            )),
            Err(err) => {
                self.logger.warn(&format!(
                    "Failed to update amount of product {}: {}",
                    params.product_id, err
                ));
                self.notifier
                    .report_error(err.user_message(CartOperation::UpdateProductAmount));
            }
        }

        guard.current().clone()
    }
}
