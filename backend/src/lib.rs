//! # Sustainability KPI Mock API
//!
//! Deterministic, fabricated sustainability metrics for food-service sites,
//! served over a small REST API together with a tool-discovery manifest for
//! tool-calling agents.
//!
//! ## Features
//!
//! - **Seed Derivation**: SHA-256 based seeds per (site, period) pair
//! - **KPI Synthesis**: bounded, reproducible metrics with derived fields
//! - **Comparison**: period-over-period deltas and up/down/flat trends
//! - **Tool Manifest**: machine-readable description of the endpoints
//! - **HTTP API**: axum server behind the `http-server` feature
//!
//! ## Architecture
//!
//! - [`api`]: DTO re-exports for API consumers
//! - [`models`]: sites, periods and KPI records
//! - [`services`]: the pure generator and comparison logic
//! - [`routes`]: route names, request bodies and the tool manifest
//! - [`config`]: server configuration from TOML and environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Every generated value is a pure function of its inputs; nothing is stored.

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
