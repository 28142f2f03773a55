//! # API Shared
//!
//! Request and response bodies shared by the triage front ends.
//!
//! Contains:
//! - Wire types (`wire` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the workspace runner.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
