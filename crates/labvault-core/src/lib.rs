//! # labvault-core
//!
//! Core crate for LabVault. Contains configuration schemas, typed
//! identifiers, the normalized slot coordinate type, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other LabVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
