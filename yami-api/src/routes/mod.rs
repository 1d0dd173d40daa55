//! API route handlers
//!
//! - `health`: Health check endpoint
//! - `assign_role`: Add a user to a directory group
//! - `fetch_users`: List users partitioned by role

pub mod assign_role;
pub mod fetch_users;
pub mod health;
