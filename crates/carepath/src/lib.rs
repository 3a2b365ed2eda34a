//! Core library for the CarePath career-type quiz service.
//!
//! The diagnostic scoring engine lives under [`workflows::diagnosis`]; outbound
//! lead notification seams live under [`workflows::leads`]. Configuration,
//! telemetry, and the application error type support the binary in
//! `services/api`.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
