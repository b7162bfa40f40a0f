//! Recipe Box server library.
//!
//! The JSON API is exposed as a library so the router can be exercised
//! in-process by tests and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
