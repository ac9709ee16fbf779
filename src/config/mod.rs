// config/mod.rs

//! # Config Module
//!
//! Key/value file parsing and layered resolution of database parameters.

pub mod db_config;
pub mod keypair;
