use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{CartItemResponse, UpdateProductAmountRequest, cart_response};
use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    update_product_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductUseCase>,
        update_product_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_product_amount_use_case,
        }
    }
}

fn parse_product_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    raw.parse::<ProductId>()
        .map_err(|_| Json(ErrorResponse::validation("cart.invalid_product_id")))
}

/// Shopping cart API
///
/// Mutations always answer with the resulting cart. Failures (unknown
/// product, insufficient stock, unreachable services) leave the cart
/// unchanged and are published on `/notifications`.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the cart lines in insertion order.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<Vec<CartItemResponse>> {
        Json(cart_response(self.get_cart_use_case.execute().await))
    }

    /// Add a product
    ///
    /// Adds one unit of the product, or inserts it with amount 1.
    #[oai(path = "/cart/items/:product_id", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(&self, product_id: Path<String>) -> CartMutationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        let cart = self
            .add_product_use_case
            .execute(AddProductParams { product_id })
            .await;
        CartMutationResponse::Ok(Json(cart_response(cart)))
    }

    /// Remove a product
    ///
    /// Removes the product line. Unknown products are ignored.
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_product(&self, product_id: Path<String>) -> CartMutationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        let cart = self
            .remove_product_use_case
            .execute(RemoveProductParams { product_id })
            .await;
        CartMutationResponse::Ok(Json(cart_response(cart)))
    }

    /// Update a product amount
    ///
    /// Sets the quantity of a product already in the cart.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_product_amount(
        &self,
        product_id: Path<String>,
        body: Json<UpdateProductAmountRequest>,
    ) -> CartMutationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        let cart = self
            .update_product_amount_use_case
            .execute(UpdateProductAmountParams {
                product_id,
                amount: body.0.amount,
            })
            .await;
        CartMutationResponse::Ok(Json(cart_response(cart)))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_numeric_product_id() {
        assert_eq!(parse_product_id("12").unwrap(), ProductId::new(12));
    }

    #[test]
    fn should_reject_non_numeric_product_id() {
        let err = parse_product_id("abc").unwrap_err();
        assert_eq!(err.0.message, "cart.invalid_product_id");
    }
}
