//! Networking modules for the upstream REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `auth_gateway` drives the session lifecycle on
//! top of it, and `types` defines the wire schema.

pub mod api;
pub mod auth_gateway;
pub mod types;
