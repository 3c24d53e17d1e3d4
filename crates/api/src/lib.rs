//! HTTP API: server, routing, and reply → response mapping.

pub mod app;
pub mod config;
pub mod middleware;
