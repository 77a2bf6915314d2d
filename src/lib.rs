pub mod api;
pub mod auth;
pub mod cli;
pub mod color;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod state;

use api::client::BridgeClient;
use api::lights::LightsApi;
use auth::pairing::{self, PairingClient, TokioSleeper};
use cli::output::print_error;
use config::{BridgeConfig, Paths, RuntimeConfig};
use directory::Selector;
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        verbose: cli_args.verbose,
    };

    match invoke(cli_args, &config).await {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn invoke(cli_args: cli::Cli, config: &RuntimeConfig) -> Result<(), AppError> {
    let paths = Paths::from_home()?;
    let bridge = BridgeConfig::load(&paths.config)?;
    let client = BridgeClient::new(bridge.base_url(), config.verbose)?;

    // Pairing runs once, gating everything else. A stored credential skips
    // straight to the auth check.
    let username = match auth::credentials::load(&paths.creds)? {
        Some(username) => username,
        None => {
            let mut pairing = PairingClient::new(&client);
            let username = pairing.pair(&mut TokioSleeper).await?;
            println!(
                "Successfully authenticated. Your new api token is: {}",
                username
            );
            println!("Writing to config file {}.", paths.creds.display());
            if let Err(err) = auth::credentials::store(&paths.creds, &username) {
                eprintln!("Error was: {}", err);
                eprintln!(
                    "Write operation failed. Please manually create the file {} and put this in it:",
                    paths.creds.display()
                );
                eprintln!("{}", auth::credentials::manual_instructions(&username));
                return Err(err);
            }
            username
        }
    };

    let bridge_name = pairing::check_auth(&client, &username).await?;
    if config.verbose {
        eprintln!("Successfully authenticated to bridge: {}", bridge_name);
    }

    let Some(selector) = cli_args.selector else {
        return Ok(());
    };
    let api = LightsApi::new(client, username);

    match directory::classify(&selector, &cli_args.args) {
        Selector::Fleet(preset) => dispatch::apply_fleet(&api, preset).await,
        Selector::AllGroups => {
            let command = dispatch::parse_group_command(&cli_args.args)?;
            println!("Selected groups: [0]");
            dispatch::apply_group(&api, models::group::ALL_LIGHTS, &command, config).await
        }
        Selector::Device(id) => {
            let command = dispatch::parse_device_command(&cli_args.args)?;
            println!("Selected lights: [{}]", id);
            dispatch::apply_device(&api, id, &command).await
        }
        Selector::Profile(None) => dispatch::capture_profile(&api).await,
        Selector::Profile(Some(name)) => {
            dispatch::apply_profile(&api, &paths.profile(&name)).await
        }
        Selector::GroupName(name) => {
            let command = dispatch::parse_group_command(&cli_args.args)?;
            let groups = directory::resolve_group_name(&api, &name).await?;
            println!("Selected groups: {:?}", groups);
            for id in groups {
                dispatch::apply_group(&api, id, &command, config).await?;
            }
            Ok(())
        }
    }
}
