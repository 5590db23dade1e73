//! Shared types, errors, and configuration for Deptboard.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for sites, units, and operators
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DefaultDateRange};
pub use error::{AppError, AppResult};
