//! `onboard create-user` — copy a template user into a new account.

use clap::Args;
use onboard_core::{NewUserInput, ProvisionSettings, Provisioner, WeekdayConvention};
use onboard_directory::{DirectoryConfig, DirectorySession, RestDirectory};

use crate::prompt;

#[derive(Debug, Args)]
pub struct CreateUserArgs {
    /// Domain suffix for the new user's principal name.
    #[arg(long, env = "ONBOARD_DOMAIN", default_value = "example.com")]
    domain: String,

    /// Week-start convention for the start-day password: `monday` names
    /// the true weekday, `sunday` reproduces the legacy scripts' shifted
    /// names. Both operators must agree on one or passwords diverge.
    #[arg(long, env = "ONBOARD_WEEK_START", default_value = "monday", value_parser = parse_week_start)]
    week_start: WeekdayConvention,

    /// Directory gateway API root.
    #[arg(
        long,
        env = "ONBOARD_GATEWAY_URL",
        default_value = "http://127.0.0.1:8080/directory/v1"
    )]
    gateway_url: String,

    /// Token endpoint for the gateway's client-credentials grant.
    #[arg(
        long,
        env = "ONBOARD_GATEWAY_TOKEN_URL",
        default_value = "http://127.0.0.1:8080/oauth2/token"
    )]
    token_url: String,

    #[arg(long, env = "ONBOARD_GATEWAY_CLIENT_ID", default_value = "onboard")]
    client_id: String,

    #[arg(long, env = "ONBOARD_GATEWAY_CLIENT_SECRET", default_value = "")]
    client_secret: String,
}

fn parse_week_start(value: &str) -> Result<WeekdayConvention, String> {
    WeekdayConvention::parse(value)
        .ok_or_else(|| format!("unknown week-start convention `{value}` (expected monday or sunday)"))
}

fn collect_input() -> anyhow::Result<NewUserInput> {
    Ok(NewUserInput {
        given_name: prompt::line("Enter the first name of the new user")?,
        surname: prompt::line("Enter the last name of the new user")?,
        template_username: prompt::line("Enter the username of the user to copy (sAMAccountName)")?,
        manager_username: prompt::line("Enter the manager of the new user (sAMAccountName)")?,
        mobile: prompt::line("Enter the mobile number of the new user")?,
        title: prompt::line("Enter the title of the new user")?,
        start_date: prompt::start_date(
            "Enter the start date of the new user as MMDDYYYY (blank for today)",
        )?,
    })
}

pub async fn run(args: CreateUserArgs) -> anyhow::Result<()> {
    let input = collect_input()?;

    let config = DirectoryConfig {
        base_url: args.gateway_url,
        token_url: args.token_url,
        client_id: args.client_id,
        client_secret: args.client_secret,
        ..DirectoryConfig::default()
    };
    let session = DirectorySession::connect(&config).await?;
    let provisioner = Provisioner::new(
        RestDirectory::new(session),
        ProvisionSettings {
            domain: args.domain,
            weekday_convention: args.week_start,
        },
    );

    let result = provisioner.provision(input).await;
    provisioner.into_directory().into_session().close();
    let outcome = result?;

    println!(
        "Created {} ({})",
        outcome.principal_name, outcome.user.distinguished_name
    );
    println!("Initial password: {}", outcome.password);
    for group in &outcome.groups_added {
        println!("  added to {group}");
    }
    for failure in &outcome.group_failures {
        println!("  FAILED  {}: {}", failure.group, failure.error);
    }
    if outcome.is_partial() {
        println!("Account created with partial group assignment; add the failed groups manually.");
    }
    Ok(())
}
