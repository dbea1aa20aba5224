//! Terminal UI frontend for the fighter roster.
//!
//! This crate provides a terminal-based user interface built on ratatui and
//! crossterm. It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! `CliFrontend` is a pure UI layer that:
//! - Receives the store handle from the composition root
//! - Does NOT construct a store itself
//! - Runs store calls on spawned tasks and feeds replies back through the
//!   controller's ticket guard

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
