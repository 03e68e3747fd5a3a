use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dsp_client::{ClientConfig, DspClient};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod settings;
mod sub_commands;
mod utils;

use settings::Settings;

/// Command line client for the DSP backend
#[derive(Parser)]
#[command(name = "dsp-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend URL, `http://localhost:3001` when unset
    #[arg(short, long, env = "DSP_BACKEND_URL")]
    backend_url: Option<String>,
    /// Bearer token for authenticated calls
    #[arg(short, long, env = "DSP_AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Path to config file, defaults to `~/.dsp-cli/config.toml`
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Logging level
    #[arg(short, long, default_value = "error")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check backend health
    Health,
    /// Create an account and print its access token
    Signup(sub_commands::signup::SignupSubCommand),
    /// Log in and print an access token
    Login(sub_commands::login::LoginSubCommand),
    /// Show the user the token belongs to
    Me,
    /// GET a backend path
    Get(sub_commands::get::GetSubCommand),
    /// POST JSON to a backend path
    Post(sub_commands::post::PostSubCommand),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();
    let default_filter = args.log_level;

    let hyper_filter = "hyper_util=warn";

    let env_filter = EnvFilter::new(format!("{},{}", default_filter, hyper_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings =
        Settings::load(args.config.as_deref())?.with_overrides(args.backend_url, args.token);
    let client = DspClient::with_config(ClientConfig::from_option(settings.backend_url));
    tracing::debug!("Using backend {}", client.base_url());
    let token = settings.token.as_deref();

    match &args.command {
        Commands::Health => sub_commands::health::health(&client).await,
        Commands::Signup(sub_command_args) => {
            sub_commands::signup::signup(&client, sub_command_args).await
        }
        Commands::Login(sub_command_args) => {
            sub_commands::login::login(&client, sub_command_args).await
        }
        Commands::Me => sub_commands::me::me(&client, token).await,
        Commands::Get(sub_command_args) => {
            sub_commands::get::get(&client, token, sub_command_args).await
        }
        Commands::Post(sub_command_args) => {
            sub_commands::post::post(&client, token, sub_command_args).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_post_with_body() {
        let cli = Cli::try_parse_from([
            "dsp-cli",
            "--backend-url",
            "http://example.com",
            "post",
            "/query",
            "--body",
            r#"{"query":"q"}"#,
        ])
        .expect("Arguments should parse");

        assert_eq!(cli.backend_url.as_deref(), Some("http://example.com"));
        assert!(matches!(cli.command, Commands::Post(_)));
    }

    #[test]
    fn test_parse_log_level() {
        let cli = Cli::try_parse_from(["dsp-cli", "--log-level", "debug", "health"])
            .expect("Arguments should parse");

        assert_eq!(cli.log_level, Level::DEBUG);
        assert!(matches!(cli.command, Commands::Health));
    }
}
