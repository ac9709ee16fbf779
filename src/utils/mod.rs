// utils/mod.rs

//! # Utility Module
//!
//! Text comparison, debug logging, terminal colors, platform queries and
//! the database connection entry point.

pub mod connection;
pub mod display;
pub mod logging;
pub mod platform;
pub mod text;
