//! Process wiring for the clubgate verification bot.
//!
//! - [`Settings`]: command-line and environment configuration
//! - [`init_telemetry`]: tracing subscriber setup
//! - [`keepalive`]: liveness and metrics HTTP endpoint

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
pub mod keepalive;
mod telemetry;

pub use config::Settings;
pub use telemetry::{TelemetryConfig, init_telemetry};
