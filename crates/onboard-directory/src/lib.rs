//! Onboard Directory — REST gateway implementation of the core's lookup
//! and write contracts.
//!
//! This crate provides:
//! - Session management with an explicit lifecycle ([`DirectorySession`],
//!   [`DirectoryConfig`])
//! - The adapter itself ([`RestDirectory`])
//! - Error types and conversions ([`GatewayError`])

mod config;
mod error;
mod rest;
mod session;
mod wire;

pub use config::DirectoryConfig;
pub use error::GatewayError;
pub use rest::RestDirectory;
pub use session::DirectorySession;
