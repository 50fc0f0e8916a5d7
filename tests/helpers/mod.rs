//! Test helpers module
//!
//! Utilities for running the registry against a real PostgreSQL database.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_data;

pub use database_helper::*;
pub use test_data::*;
