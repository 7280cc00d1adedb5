//! Error types

mod config;

pub use config::*;
