// commands/mod.rs

//! # Commands Module
//!
//! One submodule per CLI subcommand, each exposing `command()` and
//! `execute()`.

pub mod common_args;
pub mod compare;
pub mod connect;
pub mod resolve;
pub mod whoami;
