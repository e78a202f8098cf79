use crate::domain::errors::{RepositoryError, ServiceError};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.duplicate_item")]
    DuplicateItem,
    #[error("cart.invalid_amount")]
    InvalidAmount,
    #[error("cart.transport")]
    Transport(#[source] ServiceError),
    #[error("repository.persistence")]
    Storage(#[from] RepositoryError),
}

impl From<ServiceError> for CartError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => CartError::ProductNotFound,
            other => CartError::Transport(other),
        }
    }
}

/// Cart operations that report failures to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartOperation {
    /// Generic message shown when the operation fails for any reason other than stock.
    pub fn failure_message(&self) -> &'static str {
        match self {
            CartOperation::AddProduct => "failed to add product",
            CartOperation::RemoveProduct => "failed to remove product",
            CartOperation::UpdateProductAmount => "failed to update quantity",
        }
    }
}

impl CartError {
    pub const OUT_OF_STOCK_MESSAGE: &'static str = "requested quantity exceeds stock";

    /// Human-readable message for the notification channel.
    pub fn user_message(&self, operation: CartOperation) -> &'static str {
        match self {
            CartError::OutOfStock => Self::OUT_OF_STOCK_MESSAGE,
            _ => operation.failure_message(),
        }
    }
}
