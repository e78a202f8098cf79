use async_trait::async_trait;
use serde::Deserialize;

use business::domain::cart::services::{Stock, StockOracle};
use business::domain::errors::ServiceError;
use business::domain::shared::value_objects::ProductId;

use crate::client::StorefrontClient;

#[derive(Deserialize)]
struct StockResponse {
    amount: u32,
}

pub struct StockOracleHttp {
    client: StorefrontClient,
}

impl StockOracleHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockOracle for StockOracleHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        let url = self.client.stock_url(product_id);
        let data: StockResponse = self.client.get_json(&url).await?;

        Ok(Stock {
            product_id,
            amount: data.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn oracle_for(base_url: String) -> StockOracleHttp {
        StockOracleHttp::new(StorefrontClient::new(base_url, Duration::from_secs(1)))
    }

    #[tokio::test]
    async fn should_return_available_amount() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/stock/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 1, "amount": 5}"#)
            .create_async()
            .await;

        let result = oracle_for(server.url()).get_stock(ProductId::new(1)).await;

        let stock = result.unwrap();
        assert_eq!(stock.amount, 5);
        assert_eq!(stock.product_id, ProductId::new(1));
    }

    #[tokio::test]
    async fn should_map_404_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stock/999")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let result = oracle_for(server.url()).get_stock(ProductId::new(999)).await;

        assert!(matches!(result.unwrap_err(), ServiceError::NotFound));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn should_map_server_error_to_transport() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/stock/1")
            .with_status(500)
            .create_async()
            .await;

        let result = oracle_for(server.url()).get_stock(ProductId::new(1)).await;

        assert!(matches!(result.unwrap_err(), ServiceError::Transport));
    }

    #[tokio::test]
    async fn should_map_invalid_body_to_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/stock/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"amount": "plenty"}"#)
            .create_async()
            .await;

        let result = oracle_for(server.url()).get_stock(ProductId::new(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            ServiceError::MalformedResponse
        ));
    }

    #[tokio::test]
    async fn should_map_unreachable_host_to_transport() {
        let oracle = StockOracleHttp::new(StorefrontClient::new(
            "http://127.0.0.1:9",
            Duration::from_millis(200),
        ));

        let result = oracle.get_stock(ProductId::new(1)).await;

        assert!(matches!(result.unwrap_err(), ServiceError::Transport));
    }
}
