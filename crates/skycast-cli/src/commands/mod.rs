pub mod alert;
pub mod condition;
pub mod config;
pub mod context;
pub mod forecast;
