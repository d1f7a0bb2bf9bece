//! tikhubctl - Main entry point

use clap::Parser;
use log::{debug, info};

use tikhubctl::{
    run_check_command, run_config_command, run_ops_command, run_run_command, Cli, Command,
    CredentialResolver, TikHubClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tikhubctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: profile={:?}, base_url={:?}, batch={}",
        cli.profile, cli.base_url, cli.batch
    );

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Ops { resource } => run_ops_command(*resource),
        Command::Config { action } => run_config_command(
            action,
            cli.api_key.as_deref(),
            cli.base_url.as_deref(),
            cli.batch,
        ),
        Command::Check => {
            let client = build_client(cli)?;
            run_check_command(&client, cli.batch).await
        }
        Command::Run(args) => {
            let client = build_client(cli)?;
            run_run_command(&client, args, cli.batch).await
        }
    }
}

fn build_client(cli: &Cli) -> Result<TikHubClient, Box<dyn std::error::Error>> {
    let credential = CredentialResolver::new(cli.batch).resolve(
        cli.api_key.as_deref(),
        cli.base_url.as_deref(),
        cli.profile.as_deref(),
    )?;
    Ok(TikHubClient::new(credential))
}
