use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Cart {
        let cart = self.state.snapshot().await;
        self.logger
            .debug(&format!("Cart read with {} item(s)", cart.len()));
        cart
    }
}
