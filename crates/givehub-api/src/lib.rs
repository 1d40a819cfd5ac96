//! # givehub-api
//!
//! HTTP API layer for GiveHub built on Axum.
//!
//! Provides the REST endpoints for devices, needs, matches, transfers,
//! and vouchers, plus extractors, DTOs, request logging, and the
//! `AppError` → HTTP response mapping. Authentication itself happens
//! upstream: the gateway forwards a verified identity in headers.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
