//! Onboard Cloud — single-shot REST flows that run after an account
//! exists: cloud license (SKU) assignment and telephony extension
//! assignment.
//!
//! These flows are deliberately independent of the provisioning core:
//! they share no domain types with it and each is one authenticated
//! request with a success check.

pub mod config;
pub mod error;
pub mod extension;
pub mod license;
pub mod token;

pub use config::{CloudConfig, TelephonyConfig};
pub use error::CloudError;
pub use extension::{Extension, ExtensionClient, ExtensionContact};
pub use license::LicenseClient;
