//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod say;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::cli::say::run_say;
use crate::core::config::Config;
use crate::core::constants::BASE_URL_ENV_VAR;
use crate::ui::appearance::Appearance;
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "eventsync")]
#[command(about = "A playful terminal chat for planning events with an AI assistant")]
#[command(
    long_about = "EventSync is a full-screen terminal chat for brainstorming and planning events \
with an AI assistant. Each message is posted to the configured backend and the reply is shown \
as a chat bubble.\n\n\
Backend:\n\
  --base-url, EVENTSYNC_API_BASE_URL, or 'eventsync set base-url <url>', in that order.\n\n\
Controls:\n\
  Enter             Send the message\n\
  Shift+Enter       Insert a newline (Alt+Enter or Ctrl+J also work)\n\
  Ctrl+T            Toggle the light/dark theme\n\
  Up/Down           Move between input lines, or scroll a one-line draft\n\
  Ctrl+Up/Down/PgUp/PgDn/Mouse  Scroll through the conversation\n\
  Click             Open links, press Send, or toggle the theme\n\
  Esc/Ctrl+C        Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chat backend (overrides environment and config file)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Theme to start in
    #[arg(long, global = true, value_enum, value_name = "THEME")]
    pub theme: Option<Appearance>,

    /// Write diagnostics to the specified file
    #[arg(long, global = true, value_name = "FILE")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send a single message and print the reply without the TUI
    Say {
        /// Message to send (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        value: Option<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Show the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Chat);

    let interactive = command == Commands::Chat;
    init_tracing(&LogTarget::resolve(args.debug_log, interactive))?;

    match command {
        Commands::Chat => {
            let base_url = effective_base_url(args.base_url.as_deref())?;
            run_chat(base_url, args.theme.unwrap_or_default()).await
        }
        Commands::Say { prompt } => {
            let base_url = effective_base_url(args.base_url.as_deref())?;
            run_say(prompt, base_url).await
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let Some(value) = value else {
                config.print_all();
                return Ok(());
            };
            if let Err(e) = set_config_value(&mut config, &key, &value) {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
            config.save()?;
            println!("✅ Set {key} to: {}", value.trim());
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            if let Err(e) = unset_config_value(&mut config, &key) {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
        Commands::Config => {
            let config = Config::load()?;
            config.print_all();
            let env_value = std::env::var(BASE_URL_ENV_VAR).ok();
            match config.resolve_base_url(args.base_url.as_deref(), env_value.as_deref()) {
                Some((url, source)) => println!("  effective: {url} (from {})", source.describe()),
                None => println!("  effective: none, messages will fail with the fallback reply"),
            }
            Ok(())
        }
    }
}

/// Resolve the backend URL for this run, logging where it came from.
fn effective_base_url(flag: Option<&str>) -> Result<Option<String>, Box<dyn Error>> {
    let config = Config::load()?;
    let env_value = std::env::var(BASE_URL_ENV_VAR).ok();
    match config.resolve_base_url(flag, env_value.as_deref()) {
        Some((url, source)) => {
            info!(%url, source = source.describe(), "chat backend resolved");
            Ok(Some(url))
        }
        None => {
            warn!("no chat backend configured");
            Ok(None)
        }
    }
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    match key {
        "base-url" => {
            let value = value.trim();
            let parsed = reqwest::Url::parse(value)
                .map_err(|e| format!("Invalid base-url '{value}': {e}"))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "Invalid base-url '{value}': expected an http or https URL"
                ));
            }
            config.base_url = Some(value.to_string());
            Ok(())
        }
        _ => Err(format!("Unknown config key: {key}")),
    }
}

fn unset_config_value(config: &mut Config, key: &str) -> Result<(), String> {
    match key {
        "base-url" => {
            config.base_url = None;
            Ok(())
        }
        _ => Err(format!("Unknown config key: {key}")),
    }
}
