//! onboard — interactive directory provisioning CLI.

mod commands;
mod prompt;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "onboard",
    version,
    about = "Provision directory accounts from a template user"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a directory account by copying a template user's attributes
    /// and group memberships.
    CreateUser(commands::create_user::CreateUserArgs),
    /// Assign a cloud license SKU to an existing principal.
    AssignLicense(commands::license::AssignLicenseArgs),
    /// Assign an unassigned telephony extension to a user.
    AssignExtension(commands::extension::AssignExtensionArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("onboard=info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::CreateUser(args) => commands::create_user::run(args).await,
        Command::AssignLicense(args) => commands::license::run(args).await,
        Command::AssignExtension(args) => commands::extension::run(args).await,
    }
}
