//! # Marquee Config
//!
//! Configuration management for Marquee.
//! Supports layered configuration from files and environment variables,
//! validated once at load time.

mod app_config;
mod loader;
mod strategy;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use strategy::*;
pub use validation::*;
