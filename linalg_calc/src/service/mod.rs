pub mod calculator;
pub mod config;
pub mod cors;
pub mod error;
pub mod http_service;
pub mod matrix;
pub mod payload;
pub mod service_builder;

pub use config::{ServerConfig, ServiceKind};
pub use service_builder::ServiceBuilder;
