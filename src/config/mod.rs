// src/config/mod.rs

pub mod config;

pub use config::{Config, ConfigError, DemoConfig};
