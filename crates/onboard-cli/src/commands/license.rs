//! `onboard assign-license` — assign a cloud license SKU to a principal.

use anyhow::Context;
use clap::Args;
use onboard_cloud::{CloudConfig, LicenseClient};

use crate::prompt;

#[derive(Debug, Args)]
pub struct AssignLicenseArgs {
    /// Identity tenant the token is requested from.
    #[arg(long, env = "ONBOARD_CLOUD_TENANT_ID")]
    tenant_id: String,

    #[arg(long, env = "ONBOARD_CLOUD_CLIENT_ID")]
    client_id: String,

    #[arg(long, env = "ONBOARD_CLOUD_CLIENT_SECRET")]
    client_secret: String,
}

pub async fn run(args: AssignLicenseArgs) -> anyhow::Result<()> {
    let principal = prompt::line("Enter the principal name to license (user@domain)")?;
    let sku_id = prompt::line("Enter the license SKU id")?;

    let config = CloudConfig::for_tenant(&args.tenant_id, args.client_id, args.client_secret);
    let client = LicenseClient::connect(&config)
        .await
        .context("could not authenticate against the identity service")?;

    client
        .assign_license(&principal, &sku_id)
        .await
        .context("failed to assign the license")?;

    println!("License assigned successfully.");
    Ok(())
}
