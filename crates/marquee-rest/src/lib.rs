//! # Marquee REST
//!
//! REST API layer using Axum for Marquee.
//! Provides HTTP endpoints for users, cached movie records, and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
