//! Common test utilities and fixtures
//!
//! - `TestApp`: per-test store with seed/dispose lifecycle
//! - Random post generators for seed data

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

// Re-export frequently used external types for convenience
pub use actix_web::http::StatusCode;
pub use actix_web::{App, test};
pub use serde_json::{Value, json};
