//! geodir-rs
//! =========
//!
//! Workspace umbrella crate. Re-exports [`geodir_core`] so the demos under
//! `demos/` can `use geodir_rs::prelude::*;`.
pub use geodir_core::*;
