//! CLI subcommands.

pub mod create_user;
pub mod extension;
pub mod license;
