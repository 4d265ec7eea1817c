//! Common Types Library
//!
//! This crate provides the protocol enumerations shared across the RLC stack.

pub mod types;

// Re-export commonly used items
pub use types::*;
