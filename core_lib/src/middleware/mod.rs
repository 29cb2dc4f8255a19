//! Middleware components for the HTTP server

pub mod cors;
pub mod logging;
pub mod request_validation;
