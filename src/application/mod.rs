//! Application layer
//!
//! Use cases that orchestrate domain services to implement the workflows
//! exposed over HTTP.

pub mod admin;
pub mod auth;
pub mod tenant;
