use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartOperation;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct RemoveProductUseCaseImpl {
    pub state: Arc<CartState>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Cart {
        self.logger
            .info(&format!("Removing product from cart: {}", params.product_id));

        let mut guard = self.state.lock().await;
        let mut next = guard.current().clone();

        // Removing a product that is not in the cart is not an error
        if next.remove(params.product_id).is_none() {
            self.logger.debug(&format!(
                "Product {} not in cart, nothing to remove",
                params.product_id
            ));
            return next;
        }

        match guard.commit(next).await {
            Ok(()) => self
                .logger
                .info(&format!("Product removed from cart: {}", params.product_id)),
            Err(err) => {
                self.logger.error(&format!(
                    "Failed to remove product {}: {}",
                    params.product_id, err
                ));
                self.notifier
                    .report_error(err.user_message(CartOperation::RemoveProduct));
            }
        }

        guard.current().clone()
    }
}
