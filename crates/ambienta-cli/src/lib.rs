//! CLI library components for Ambienta.

pub mod config;
pub mod logging;
