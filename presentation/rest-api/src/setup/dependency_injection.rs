use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::notifier::Notifier;
use business::domain::storage::KeyValueStorage;
use logger::TracingLogger;
use notifier::NotificationFeed;
use storefront::catalog_source::CatalogSourceHttp;
use storefront::client::StorefrontClient;
use storefront::stock_oracle::StockOracleHttp;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::state::CartState;
use business::application::cart::update_product_amount::UpdateProductAmountUseCaseImpl;

use crate::config::storefront_config::StorefrontConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub notification_api: crate::api::notification::routes::NotificationApi,
}

impl DependencyContainer {
    pub async fn new(
        storage: Arc<dyn KeyValueStorage>,
        storefront: &StorefrontConfig,
    ) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let storefront_client =
            StorefrontClient::new(storefront.api_url.clone(), storefront.timeout);
        let stock_oracle = Arc::new(StockOracleHttp::new(storefront_client.clone()));
        let catalog = Arc::new(CatalogSourceHttp::new(storefront_client));
        let feed = Arc::new(NotificationFeed::new());
        let notifier: Arc<dyn Notifier> = feed.clone();

        // Cart state, restored once from storage
        let state = Arc::new(CartState::restore(storage, logger.clone()).await);

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            state: state.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            state: state.clone(),
            stock_oracle: stock_oracle.clone(),
            catalog,
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            state: state.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let update_product_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            state,
            stock_oracle,
            notifier,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_product_amount_use_case,
        );

        let notification_api = crate::api::notification::routes::NotificationApi::new(feed);

        Ok(Self {
            health_api,
            cart_api,
            notification_api,
        })
    }
}
