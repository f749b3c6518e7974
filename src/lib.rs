//! qspin: QuickSpin CLI
//!
//! This library provides:
//! - An authenticated API client with automatic token refresh
//! - One-shot CLI commands for auth, services, and configuration
//! - An interactive terminal dashboard (message-driven, single queue)
//! - Config and credential storage under `~/.qspin/`

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod tui;

pub use api::{ApiError, Client};
pub use config::Config;
