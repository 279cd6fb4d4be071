mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    expand_paths(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    // Try custom path first
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./trackforged.toml",
        "./config.toml",
        "~/.config/trackforged/config.toml",
        "/etc/trackforged/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

fn expand_paths(config: &mut Config) {
    let expand = |p: &Path| -> PathBuf { shellexpand::tilde(&p.to_string_lossy()).into_owned().into() };

    config.split.output_dir = expand(&config.split.output_dir);
    config.tools.ffmpeg_path = config.tools.ffmpeg_path.as_deref().map(expand);
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let split = &config.split;

    // Validate segment extension
    if split.extension.is_empty() || split.extension.contains(|c: char| matches!(c, '.' | '/' | '\\')) {
        anyhow::bail!("Invalid segment extension: {:?}", split.extension);
    }

    // Validate fallback codec and bitrate
    let codec = split.audio_codec().map_err(anyhow::Error::msg)?;
    if !codec.is_lossless() && split.bitrate.trim().is_empty() {
        anyhow::bail!("Codec '{}' needs a bitrate", split.codec);
    }

    // Validate split mode
    split.split_mode().map_err(anyhow::Error::msg)?;

    // Warn on a configured tool that is missing
    if let Some(ref ffmpeg) = config.tools.ffmpeg_path {
        if ffmpeg.components().count() > 1 && !ffmpeg.exists() {
            tracing::warn!("Configured ffmpeg does not exist: {:?}", ffmpeg);
        }
    }

    Ok(())
}
