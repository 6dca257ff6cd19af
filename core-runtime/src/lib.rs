//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the SDK core:
//! - Logging and tracing infrastructure, including the idempotent debug logger
//! - Configuration management and bridge injection
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the client façade depends
//! on. It establishes the logging conventions and the fail-fast capability
//! checks used throughout the workspace.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
