//! Application layer for the distinction universe.
//!
//! The engine crates know nothing about pair selection or run loops; this
//! crate is the external caller the core is specified against. It owns the
//! growth strategies, the run orchestration and the CLI.

pub mod app;
pub mod growth;

pub use distinction_core::{AppConfig, Engine};
