//! Sastview core library.
//!
//! This crate exposes programmatic APIs for loading SAST report documents
//! and deriving the browsable view: the filtered, paginated finding list
//! with resolved source links.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and persistence of the repository base reference.
//! - `models`: Report schema (adapter) and display record structs.
//! - `filter`: Finding filtering and pagination.
//! - `link`: Deep-link resolution against a repository base URL.
//! - `view`: Assembly of display records from a report plus selections.
//! - `output`: Human/JSON printers for the findings list and summary.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod filter;
pub mod link;
pub mod models;
pub mod output;
pub mod utils;
pub mod view;
