//! `onboard assign-extension` — assign an unassigned telephony extension.

use anyhow::{Context, bail};
use clap::Args;
use onboard_cloud::{ExtensionClient, ExtensionContact, TelephonyConfig};

use crate::prompt;

#[derive(Debug, Args)]
pub struct AssignExtensionArgs {
    /// Telephony provider API root.
    #[arg(
        long,
        env = "ONBOARD_TELEPHONY_URL",
        default_value = "https://platform.ringcentral.com/restapi/v1.0"
    )]
    base_url: String,

    /// Pre-issued bearer token for the provider.
    #[arg(long, env = "ONBOARD_TELEPHONY_TOKEN")]
    access_token: String,
}

pub async fn run(args: AssignExtensionArgs) -> anyhow::Result<()> {
    let client = ExtensionClient::new(TelephonyConfig {
        base_url: args.base_url,
        access_token: args.access_token,
    });

    let extensions = client
        .list_unassigned()
        .await
        .context("could not list unassigned extensions")?;
    if extensions.is_empty() {
        println!("No unassigned extensions available.");
        return Ok(());
    }

    println!("Unassigned extensions:");
    for (index, extension) in extensions.iter().enumerate() {
        println!("{}. {}", index + 1, extension.extension_number);
    }

    let choice = prompt::line("Enter the number of the extension to assign")?;
    let choice: usize = choice
        .parse()
        .with_context(|| format!("`{choice}` is not a number"))?;
    if choice == 0 || choice > extensions.len() {
        bail!("choice {choice} is out of range (1..={})", extensions.len());
    }
    let selected = &extensions[choice - 1];

    let contact = ExtensionContact {
        first_name: prompt::line("Enter the assignee's first name")?,
        last_name: prompt::line("Enter the assignee's last name")?,
        email: prompt::line("Enter the assignee's email address")?,
    };

    client
        .assign(selected.id, &contact)
        .await
        .context("failed to assign the extension")?;

    println!(
        "Extension {} assigned successfully.",
        selected.extension_number
    );
    Ok(())
}
