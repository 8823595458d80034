//! # Marquee Server Library
//!
//! Dependency wiring and startup helpers for the Marquee server binary.

pub mod app;
pub mod di;
pub mod startup;
