//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`add`] - Register a product or vendor
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`distance`] - Great-circle distance between two points
//! - [`nearby`] - Radius search
//! - [`relocate`] - Move an entity
//! - [`remove`] - Delete an entity
//! - [`show`] - Print one entity
//! - [`stats`] - Entity counts

pub mod add;
pub mod common;
pub mod config;
pub mod distance;
pub mod nearby;
pub mod relocate;
pub mod remove;
pub mod show;
pub mod stats;
