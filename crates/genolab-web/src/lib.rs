//! genolab-web: JSON API for GenoLab
//! Exposes:
//!   - Full mutation analysis (`POST /api/analyze`)
//!   - Sequence validation and translation
//!   - Liveness check

pub mod router;
pub mod handlers;
pub mod state;
