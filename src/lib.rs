//! Focus Sessions - time-boxed work session tracker
//!
//! Records focus sessions (title, planned duration, start time), completes
//! them with the actual rounded duration and an optional reflection, and
//! reports per-day totals over completed sessions. Exposed as a JSON API
//! over HTTP and backed by SQLite.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
