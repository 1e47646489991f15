// Library for tests to access modules

pub mod collectors;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod service_info;
pub mod version;
