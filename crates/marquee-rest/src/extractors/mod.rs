//! Request extractors.

mod validated;

pub use validated::*;
