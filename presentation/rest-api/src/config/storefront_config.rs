use std::env;
use std::time::Duration;

/// Location of the storefront API serving `/stock/:id` and `/products/:id`
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl StorefrontConfig {
    /// Load storefront configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_API_URL: Base URL (default: "http://localhost:3333")
    /// - STOREFRONT_TIMEOUT_SECS: Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("STOREFRONT_API_URL").ok(),
            env::var("STOREFRONT_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(api_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| "http://localhost:3333".to_string());
        let timeout_secs = timeout_secs
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(10);

        Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
