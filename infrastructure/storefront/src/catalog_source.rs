use async_trait::async_trait;
use serde::Deserialize;

use business::domain::cart::services::{CatalogSource, ProductDetails};
use business::domain::errors::ServiceError;
use business::domain::shared::value_objects::ProductId;

use crate::client::StorefrontClient;

#[derive(Deserialize)]
struct ProductResponse {
    id: u64,
    title: String,
    price: f64,
    image: String,
}

pub struct CatalogSourceHttp {
    client: StorefrontClient,
}

impl CatalogSourceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogSource for CatalogSourceHttp {
    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError> {
        let url = self.client.product_url(product_id);
        let data: ProductResponse = self.client.get_json(&url).await?;

        Ok(ProductDetails {
            id: ProductId::new(data.id),
            title: data.title,
            price: data.price,
            image: data.image,
        })
    }
}
