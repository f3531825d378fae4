pub mod error;

pub mod service {
    pub mod config_service;
    pub mod mirror;
    pub mod scan;
    pub mod selection;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
}

pub mod facade {
    pub mod sync_facade;
    pub mod traits {
        pub mod i_sync;
    }
}

pub mod models {
    pub mod file;
    pub mod mirror;
    pub mod selection;
    pub mod sync;
}

pub mod utils {
    pub mod capacity;
    pub mod exclusion;
    pub mod path;
    pub mod utils;
}
