pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod get_categories;
    }
    pub mod shopping_cart {
        pub mod add_item;
        pub mod delete_item;
        pub mod get_item;
        pub mod get_items;
        pub mod update_qty;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod get_categories;
        }
    }
    pub mod shopping_cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod delete_item;
            pub mod get_item;
            pub mod get_items;
            pub mod update_qty;
        }
    }
}
