//! Server-rendered HTML pages.
//!
//! Uses Askama templates from `templates/`. Pages share the form DTO and
//! services of the JSON API; only the response format differs.
//!
//! # Modules
//!
//! - [`error`] - Errors rendered as HTML pages
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - Form view models

pub mod error;
pub mod handlers;
pub mod routes;
pub mod views;
