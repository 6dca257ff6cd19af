//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates. Host SDKs can depend on `sdk-core-workspace` and enable the
//! documented features without needing to wire each crate individually.

pub use core_client::*;
