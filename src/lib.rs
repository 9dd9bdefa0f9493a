//! hello-docker: a minimal HTTP demo service.
//!
//! - `GET /` returns `Hello, Docker!`
//! - `GET /health` returns `{"status":"healthy"}`
//!
//! The binary binds `0.0.0.0:5001` via [`app::run`]. Hosts that manage their
//! own listener can mount [`app::build_router`] instead.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;
