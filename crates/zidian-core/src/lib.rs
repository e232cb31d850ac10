pub mod config;
pub mod logging;

pub mod dict_db;
pub mod model;
pub mod validate;
