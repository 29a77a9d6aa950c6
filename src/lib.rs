pub mod config;
pub mod devices;
pub mod error;
pub mod metrics;
pub mod models;
pub mod orchestrator;
pub mod scenario;
pub mod service;
pub mod utils;
