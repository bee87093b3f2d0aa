//! Utility functions shared by the CLI.
//!
//! - [`app_data`] - Config file location and loading

pub mod app_data;

pub use app_data::*;
