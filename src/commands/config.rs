//! Config command - read and write configuration values

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::SeqviewConfig,
    sequence::RangePolicy,
    Result, SeqviewError,
};

const AVAILABLE_KEYS: &str = "quiet, root, allowed_extensions, all_extensions, range_policy";

fn unknown_key(key: &str) -> SeqviewError {
    SeqviewError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {AVAILABLE_KEYS}"
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse::<bool>().map_err(|_| {
        SeqviewError::InvalidInput(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}

/// Apply `key=value` to a configuration without saving it
///
/// # Errors
/// Returns `SeqviewError::InvalidInput` for malformed settings, unknown keys or
/// values that do not parse.
pub fn apply_setting(config: &mut SeqviewConfig, setting: &str) -> Result<String> {
    let Some((key, value)) = setting.split_once('=') else {
        return Err(SeqviewError::InvalidInput(
            "Invalid format. Use: seqview config set key=value".into(),
        ));
    };
    let key = key.trim();
    let value = value.trim();

    match key {
        "quiet" => config.quiet = parse_bool(key, value)?,
        "all_extensions" => config.sequence.all_extensions = parse_bool(key, value)?,
        "root" => {
            config.root = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        "allowed_extensions" => {
            config.sequence.allowed_extensions = value
                .split(',')
                .map(str::trim)
                .filter(|ext| !ext.is_empty())
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        "range_policy" => {
            config.sequence.range_policy = value
                .parse::<RangePolicy>()
                .map_err(SeqviewError::InvalidInput)?;
        }
        _ => return Err(unknown_key(key)),
    }
    get_setting(config, key)
}

/// Render the current value of `key`
///
/// # Errors
/// Returns `SeqviewError::InvalidInput` for unknown keys.
pub fn get_setting(config: &SeqviewConfig, key: &str) -> Result<String> {
    let value = match key {
        "quiet" => config.quiet.to_string(),
        "all_extensions" => config.sequence.all_extensions.to_string(),
        "root" => config
            .root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        "allowed_extensions" => config
            .sequence
            .allowed_extensions
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(","),
        "range_policy" => config.sequence.range_policy.to_string(),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

/// Execute the config command
///
/// # Errors
/// Returns `SeqviewError` if the key is invalid, the value does not parse, or
/// the configuration cannot be saved.
pub fn execute(mut config: SeqviewConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let value = apply_setting(&mut config, setting)?;
            config.save()?;
            if !quiet {
                let key = setting.split_once('=').map_or("", |(k, _)| k.trim());
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", get_setting(&config, key)?);
        }
    }
    Ok(())
}
