use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use business::domain::errors::ServiceError;
use business::domain::shared::value_objects::ProductId;

/// Shared HTTP client for the storefront API (stock and catalog endpoints).
#[derive(Clone)]
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the stock endpoint URL for a product.
    pub fn stock_url(&self, product_id: ProductId) -> String {
        format!("{}/stock/{}", self.base_url, product_id)
    }

    /// Returns the catalog endpoint URL for a product.
    pub fn product_url(&self, product_id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }

    /// GETs `url` and decodes a JSON body.
    ///
    /// 404 maps to `NotFound`, any other failure status or connection
    /// problem to `Transport`, and an undecodable body to `MalformedResponse`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ServiceError> {
        let response = self.client.get(url).send().await.map_err(|err| {
            tracing::debug!("GET {} failed: {}", url, err);
            ServiceError::Transport
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ServiceError::NotFound),
            status if !status.is_success() => {
                tracing::debug!("GET {} answered {}", url, status);
                return Err(ServiceError::Transport);
            }
            _ => {}
        }

        response.json::<T>().await.map_err(|err| {
            if err.is_decode() {
                ServiceError::MalformedResponse
            } else {
                ServiceError::Transport
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls_without_double_slash() {
        let client = StorefrontClient::new("http://localhost:3333/", Duration::from_secs(1));

        assert_eq!(client.stock_url(ProductId::new(4)), "http://localhost:3333/stock/4");
        assert_eq!(
            client.product_url(ProductId::new(4)),
            "http://localhost:3333/products/4"
        );
    }
}
