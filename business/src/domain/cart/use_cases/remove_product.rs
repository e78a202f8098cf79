use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveProductParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Cart;
}
