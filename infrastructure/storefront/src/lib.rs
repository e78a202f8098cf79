pub mod catalog_source;
pub mod client;
pub mod stock_oracle;
