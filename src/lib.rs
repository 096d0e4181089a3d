//! Rumi Lodge - membership-gated guidance portal core
//!
//! This crate holds the session/profile state model with its persistence
//! lifecycle, and the router/guard that keeps every view behind a session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod shell;
pub mod telemetry;
