//! okta-admin library
//!
//! Exposes the command tree, API client and commands so they can be
//! driven from integration tests. The binary lives in main.rs.

pub mod api;
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
