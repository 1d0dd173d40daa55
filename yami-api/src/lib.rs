//! # Yami API Server Library
//!
//! Admin-facing HTTP surface for the Yami user pool.
//!
//! ## Modules
//!
//! - `app`: Application state, router builder, and the admin gate
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
