use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct AddProductParams {
    pub product_id: ProductId,
}

/// Adds one unit of a product, validated against available stock.
///
/// Failures are reported through the notifier; the returned cart is the
/// state after the operation, changed or not.
#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> Cart;
}
