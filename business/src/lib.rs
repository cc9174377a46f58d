pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod delete_item;
        pub mod get;
        pub mod update_item;

        #[cfg(test)]
        pub(crate) mod test_doubles;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod book {
        pub mod model;
        pub mod repository;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod delete_item;
            pub mod get;
            pub mod update_item;
        }
    }
}
