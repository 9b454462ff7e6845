//! # Menu Shared
//! 
//! Shared configuration, telemetry, constants and markup helpers for the
//! menu renderkit.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use crate::config::{MenuSettings, RenderKitConfig, TelemetrySettings};
pub use error::AppError;
