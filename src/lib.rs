#![deny(warnings)]

pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod server;
pub mod services;
pub mod session;
pub mod telemetry;

// Testing utilities (always available for integration tests)
pub mod testing;

// Re-export commonly used types for convenience
pub use errors::{Error, Validation};
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use security::{PasswordHasher, Validator};
pub use session::SessionContext;
