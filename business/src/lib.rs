pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod get_cart;
        pub mod remove_product;
        pub mod state;
        pub mod update_product_amount;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod storage;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod snapshot;
        pub mod use_cases {
            pub mod add_product;
            pub mod get_cart;
            pub mod remove_product;
            pub mod update_product_amount;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
