//! Gantry Core - Core library for release preparation
//!
//! This crate provides the foundational error types, configuration, and
//! version/schedule file handling for the Gantry release tool.

pub mod config;
pub mod error;
pub mod schedule;
pub mod version;

pub use error::{GantryError, Result};
