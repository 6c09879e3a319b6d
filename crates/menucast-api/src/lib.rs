//! menucast-api
//!
//! HTTP boundary for menucast: loads fixture-backed menus, builds the item
//! tree via menucast-core, computes the active trail for a requested path,
//! and serves the JSON envelope with cache and security headers.

#![forbid(unsafe_code)]

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;
