//! HTTP handlers for all API routes.

pub mod analyze;
pub mod health;
pub mod sequence;
