//! # Marquee Core
//!
//! Core types shared by every layer of Marquee: the unified error type,
//! result alias, validation helpers, and the domain entities stored by the
//! service layer.

pub mod domain;
pub mod error;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
