use async_trait::async_trait;

use crate::domain::cart::model::Cart;

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> Cart;
}
