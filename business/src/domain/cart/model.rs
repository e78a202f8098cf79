use super::errors::CartError;
use super::services::ProductDetails;
use crate::domain::shared::value_objects::ProductId;

/// A product line in the cart. `amount` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartItem {
    /// New cart line for a product fetched from the catalog, with amount 1.
    pub fn new(details: ProductDetails) -> Self {
        Self {
            id: details.id,
            title: details.title,
            price: details.price,
            image: details.image,
            amount: 1,
        }
    }

    /// Constructor for data already persisted in storage (validated by `Cart::from_items`).
    pub fn from_repository(
        id: ProductId,
        title: String,
        price: f64,
        image: String,
        amount: u32,
    ) -> Self {
        Self {
            id,
            title,
            price,
            image,
            amount,
        }
    }
}

/// Ordered cart lines, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from existing lines, rejecting duplicates and zero amounts.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let mut cart = Self::new();
        for item in items {
            cart.push(item)?;
        }
        Ok(cart)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new line at the end of the cart.
    pub fn push(&mut self, item: CartItem) -> Result<(), CartError> {
        if item.amount < 1 {
            return Err(CartError::InvalidAmount);
        }
        if self.contains(item.id) {
            return Err(CartError::DuplicateItem);
        }
        self.items.push(item);
        Ok(())
    }

    /// Sets the amount of an existing line. Returns `false` when the product is not in the cart.
    pub fn set_amount(&mut self, product_id: ProductId, amount: u32) -> Result<bool, CartError> {
        if amount < 1 {
            return Err(CartError::InvalidAmount);
        }
        match self.items.iter_mut().find(|item| item.id == product_id) {
            Some(item) => {
                item.amount = amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the line for `product_id`, keeping the order of the others.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == product_id)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: u64, amount: u32) -> CartItem {
        CartItem::from_repository(
            ProductId::new(id),
            format!("Product {}", id),
            100.0,
            format!("https://cdn.example.com/{}.jpg", id),
            amount,
        )
    }

    #[test]
    fn should_create_item_with_amount_one_from_details() {
        let item = CartItem::new(ProductDetails {
            id: ProductId::new(1),
            title: "Shoe".to_string(),
            price: 100.0,
            image: "https://cdn.example.com/shoe.jpg".to_string(),
        });

        assert_eq!(item.amount, 1);
        assert_eq!(item.title, "Shoe");
    }

    #[test]
    fn should_reject_duplicate_product_ids() {
        let result = Cart::from_items(vec![item(1, 1), item(1, 2)]);

        assert!(matches!(result.unwrap_err(), CartError::DuplicateItem));
    }

    #[test]
    fn should_reject_zero_amount() {
        let result = Cart::from_items(vec![item(1, 0)]);

        assert!(matches!(result.unwrap_err(), CartError::InvalidAmount));
    }

    #[test]
    fn should_keep_insertion_order() {
        let cart = Cart::from_items(vec![item(3, 1), item(1, 1), item(2, 1)]).unwrap();
        let ids: Vec<u64> = cart.items().iter().map(|i| i.id.value()).collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn should_set_amount_of_matching_item_only() {
        let mut cart = Cart::from_items(vec![item(1, 1), item(2, 3)]).unwrap();

        let found = cart.set_amount(ProductId::new(1), 4).unwrap();

        assert!(found);
        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 4);
        assert_eq!(cart.find(ProductId::new(2)).unwrap().amount, 3);
    }

    #[test]
    fn should_report_missing_item_on_set_amount() {
        let mut cart = Cart::from_items(vec![item(1, 1)]).unwrap();

        let found = cart.set_amount(ProductId::new(9), 2).unwrap();

        assert!(!found);
        assert_eq!(cart, Cart::from_items(vec![item(1, 1)]).unwrap());
    }

    #[test]
    fn should_remove_item_and_keep_the_rest() {
        let mut cart = Cart::from_items(vec![item(1, 1), item(2, 3)]).unwrap();

        let removed = cart.remove(ProductId::new(1));

        assert_eq!(removed.unwrap().id, ProductId::new(1));
        assert_eq!(cart.items(), &[item(2, 3)]);
    }

    #[test]
    fn should_ignore_remove_of_missing_item() {
        let mut cart = Cart::from_items(vec![item(1, 1)]).unwrap();

        assert!(cart.remove(ProductId::new(2)).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(u64, u32),
        SetAmount(u64, u32),
        Remove(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..8, 0u32..5).prop_map(|(id, amount)| Op::Push(id, amount)),
            (0u64..8, 0u32..5).prop_map(|(id, amount)| Op::SetAmount(id, amount)),
            (0u64..8).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn should_keep_ids_unique_and_amounts_positive(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let mut cart = Cart::new();
            for op in ops {
                let _ = match op {
                    Op::Push(id, amount) => cart.push(item(id, amount)).map(|_| ()),
                    Op::SetAmount(id, amount) => cart.set_amount(ProductId::new(id), amount).map(|_| ()),
                    Op::Remove(id) => {
                        cart.remove(ProductId::new(id));
                        Ok(())
                    }
                };
            }

            let mut ids: Vec<ProductId> = cart.items().iter().map(|i| i.id).collect();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), total);
            prop_assert!(cart.items().iter().all(|i| i.amount >= 1));
        }
    }
}
