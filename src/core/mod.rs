pub mod backup;
pub mod config;
pub mod dish;
pub mod dispatch;
pub mod errors;
pub mod ingredient;
pub mod kitchen;
pub mod manager;
pub mod queue;
pub mod readiness;
pub mod registry;
pub mod rush;
pub mod setup;
pub mod station;
pub mod types;
