//! Plughub Kernel Library
//!
//! This library exposes kernel internals for integration testing.
//! The main entry point for running the server is the `plughub` binary.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod tagging;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
