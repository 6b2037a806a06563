//! RailOps - terminal dashboard for a rail operations simulator.
//!
//! The library exposes the simulation engine, catalogs and reporting so
//! the binaries and integration tests share one implementation.

pub mod analytics;
pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod simulator;
pub mod templates;
pub mod ui;
pub mod utils;

#[cfg(feature = "web")]
pub mod web;

pub use error::{Error, Result};
