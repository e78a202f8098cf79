use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct UpdateProductAmountRequest {
    /// Requested quantity. Values below 1 are ignored.
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct CartItemResponse {
    /// Product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Product image URL
    pub image: String,
    /// Quantity in the cart (at least 1)
    pub amount: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.value(),
            title: item.title,
            price: item.price,
            image: item.image,
            amount: item.amount,
        }
    }
}

pub fn cart_response(cart: Cart) -> Vec<CartItemResponse> {
    cart.into_items().into_iter().map(|i| i.into()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::ProductId;

    #[test]
    fn should_map_cart_lines_in_order() {
        let cart = Cart::from_items(vec![
            CartItem::from_repository(
                ProductId::new(2),
                "Sneaker".to_string(),
                139.9,
                "https://cdn.example.com/2.jpg".to_string(),
                3,
            ),
            CartItem::from_repository(
                ProductId::new(1),
                "Shoe".to_string(),
                100.0,
                "https://cdn.example.com/1.jpg".to_string(),
                1,
            ),
        ])
        .unwrap();

        let response = cart_response(cart);

        assert_eq!(response.len(), 2);
        assert_eq!(response[0].id, 2);
        assert_eq!(response[0].amount, 3);
        assert_eq!(response[1].title, "Shoe");
    }
}
