//! Radio Link Control (RLC) Configuration
//!
//! Resolves RRC signaled RLC-Config into the parameters used by an RLC
//! entity according to 3GPP TS 36.322

pub mod config;
pub mod params;
pub mod signaling;
pub mod tables;

pub use config::RlcConfig;
pub use params::{RlcAmConfig, RlcUmConfig};
pub use signaling::{SignaledAmConfig, SignaledRlcConfig, SignaledUmConfig};
pub use tables::ConfigTable;
