//! Core library for Lead Manager
//!
//! This crate contains the core business logic, including:
//! - Team member registry
//! - Campaign registry and API key generation
//! - Permission matrix reconciliation
//! - Lead filtering

pub mod campaign;
pub mod error;
pub mod fixtures;
pub mod lead;
pub mod member;
pub mod permission;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
