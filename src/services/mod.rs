//! Services module
//!
//! This module contains business logic services

pub mod registry;

pub use registry::EventRegistry;
