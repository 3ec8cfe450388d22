pub mod application {
    pub mod mailbox {
        pub mod import;
    }
    pub mod suggestion {
        pub mod extract;
        pub mod generate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod mailbox {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod import;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod subscription {
        pub mod repository;
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod extract;
            pub mod generate;
        }
    }
}
