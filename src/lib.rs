//! `BookMaster` - terminal dashboard for a salon appointment book.
//!
//! This crate renders a week/time appointment grid, a fixed service catalog,
//! and an appointment creation dialog over an in-memory, session-lifetime
//! store. There is no persistence and no network; the whole system is a view
//! model driven by one key event at a time.

// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod draft;
pub mod error;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod store;
pub mod types;
pub mod ui;
