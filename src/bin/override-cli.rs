use std::path::PathBuf;

use clap::{Parser, Subcommand};
use axum::http::HeaderMap;

use header_override_relay::config::{load_config, ChannelConfig, RelayConfig};
use header_override_relay::header_override::{
    apply_header_override, build_header_override_spec, HeaderCollection, HeaderOverrideSpec,
};
use header_override_relay::relay::RelayInfo;

#[derive(Parser)]
#[command(name = "override-cli")]
#[command(about = "Inspect and dry-run channel header overrides", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "relay.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration file
    Check,
    /// Print the header override spec built for a channel
    Inspect {
        #[arg(long)]
        channel: String,
        /// API key substituted for {api_key} (defaults to the channel's key)
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Apply a channel's header override to sample headers
    Apply {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        api_key: Option<String>,
        /// Request header as "Name: value" (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Check => {
            println!("{}: {} channel(s) OK", cli.config.display(), config.channels.len());
        }
        Commands::Inspect { channel, api_key } => {
            let spec = channel_spec(&config, &channel, api_key)?;
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
        Commands::Apply {
            channel,
            api_key,
            headers,
        } => {
            let spec = channel_spec(&config, &channel, api_key)?;
            let mut map = HeaderMap::new();
            for raw in &headers {
                let (name, value) = raw
                    .split_once(':')
                    .ok_or_else(|| format!("invalid header {:?}, expected \"Name: value\"", raw))?;
                if !map.set_value(name.trim(), value.trim()) {
                    return Err(format!("invalid header {:?}", raw).into());
                }
            }
            apply_header_override(&mut map, Some(&spec));
            for (name, value) in &map {
                println!("{}: {}", name, String::from_utf8_lossy(value.as_bytes()));
            }
        }
    }

    Ok(())
}

fn find_channel<'a>(
    config: &'a RelayConfig,
    name: &str,
) -> Result<&'a ChannelConfig, Box<dyn std::error::Error>> {
    config
        .channel(name)
        .ok_or_else(|| format!("unknown channel '{}'", name).into())
}

fn channel_spec(
    config: &RelayConfig,
    name: &str,
    api_key: Option<String>,
) -> Result<HeaderOverrideSpec, Box<dyn std::error::Error>> {
    let channel = find_channel(config, name)?;
    let info = RelayInfo::new(
        "cli",
        channel.name.clone(),
        api_key.unwrap_or_else(|| channel.api_key.clone()),
    );
    Ok(build_header_override_spec(channel.header_override.as_ref(), &info)?)
}
