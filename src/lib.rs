//! Shiftboard: tenant administration API for a multi-tenant shift scheduling service
//!
//! Layered hexagonally: `domain` holds entities, services and ports,
//! `application` the use cases, `adapters::http` the actix-web surface and
//! `infrastructure` the PostgreSQL, in-memory and Argon2 implementations.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
