//! Server module for building the HTTP server
//!
//! `ServerBuilder` mounts the resource routes under `/api`, adds the health
//! checks and wraps everything in request tracing.

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::build_api_routes;
