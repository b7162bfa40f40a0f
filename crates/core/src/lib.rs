//! Recipe Box Core - Shared domain library.
//!
//! This crate provides the types used across all Recipe Box components:
//! - `server` - JSON API over the recipe store
//! - `cli` - Command-line tools for schema setup and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP framework. Validation and the error taxonomy live here so
//! that every caller enforces the same rules.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs and the recipe/item domain types
//! - [`validation`] - Field rules applied to incoming recipe payloads
//! - [`error`] - Error codes and the uniform JSON error envelope

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod types;
pub mod validation;

pub use error::{ErrorBody, ErrorCode, ErrorEnvelope};
pub use types::*;
pub use validation::{ValidationError, ValidationReason, validate};
