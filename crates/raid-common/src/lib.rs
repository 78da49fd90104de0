//! # raid-common
//!
//! Shared utilities for the raid bot workspace: environment-driven
//! configuration and tracing setup.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ConfigError};
