use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::shared::value_objects::ProductId;

/// Available quantity reported by the stock service. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    pub product_id: ProductId,
    pub amount: u32,
}

/// Catalog metadata for a product, without any cart quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Service port for reading available stock per product.
///
/// Returns `ServiceError::NotFound` when the product is unknown to the
/// stock service.
#[async_trait]
pub trait StockOracle: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
}

/// Service port for reading product metadata by id.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError>;
}
