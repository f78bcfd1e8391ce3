//! JSON API under `/api`, plus the `/health` endpoint.
//!
//! Errors leave this layer as [`crate::error::AppError`] and are rendered as
//! `{"error": {"code", "message", "details"}}`.
//!
//! - [`dto`] - request and response bodies
//! - [`handlers`] - document, document type and health handlers
//! - [`middleware`] - request tracing
//! - [`routes`] - the `/api` router

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
