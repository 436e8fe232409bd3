//! Config commands

use anyhow::bail;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::ConfigCommands;

pub fn handle(action: ConfigCommands, profile: Option<&str>) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Init => {
            let path = Config::default().save(profile)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(profile)?;
            match key.as_str() {
                "api_url" => config.api_url = Some(value),
                "default_format" => {
                    if OutputFormat::from_config(&value).is_none() {
                        bail!("Unknown output format: {}", value);
                    }
                    config.default_format = Some(value);
                }
                _ => bail!("Unknown config key: {}", key),
            }
            config.save(profile)?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(profile)?;
            let value = match key.as_str() {
                "api_url" => config.api_url,
                "default_format" => config.default_format,
                _ => bail!("Unknown config key: {}", key),
            };
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::List => {
            let config = Config::load(profile)?;
            println!("api_url: {}", config.api_url.unwrap_or_else(|| "(not set)".into()));
            let format = config.default_format.unwrap_or_else(|| "(not set)".into());
            println!("default_format: {}", format);
        }
    }
    Ok(())
}
