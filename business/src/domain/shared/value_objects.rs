use serde::{Deserialize, Serialize};

/// Identifies a product across the catalog, the stock service and the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric identifier.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid product id: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn should_convert_from_u64() {
        let id: ProductId = 7.into();
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn should_parse_from_str() {
        let id: ProductId = "15".parse().unwrap();
        assert_eq!(id, ProductId::new(15));
    }

    #[test]
    fn should_reject_non_numeric_str() {
        let result = "shoe".parse::<ProductId>();
        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
