#![deny(missing_docs)]

//! Core library for the student registry HTTP service.

/// HTTP routing and REST handlers.
pub mod api;
/// Command-line argument parsing and runtime configuration.
pub mod config;
/// Structured logging and tracing setup.
pub mod logging;
/// Randomized sample-data generation for seed-mode.
pub mod seeder;
/// Concurrent in-memory student store.
pub mod store;
