pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub(crate) mod session;
        pub mod set_business;
        pub mod start;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_menu;
    }
    pub mod checkout {
        pub mod place_order;
    }
    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_menu;
        }
    }
    pub mod storefront {
        pub mod errors;
        pub mod hours;
        pub mod model;
    }
    pub mod cart {
        pub mod builder;
        pub mod engine;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod set_business;
            pub mod start;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod place_order;
        }
    }
}
