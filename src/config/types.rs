use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trackforged_av::actions::{AudioCodec, ExtractSettings};
use trackforged_parser::SplitMode;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub split: SplitConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Explicit ffmpeg location; looked up on PATH when unset
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitConfig {
    /// Directory holding downloaded sources and receiving segments
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Segment file extension
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Codec for the re-encode fallback (aac, alac, flac, opus, mp3)
    #[serde(default = "default_codec")]
    pub codec: String,

    /// Bitrate for the re-encode fallback
    #[serde(default = "default_bitrate")]
    pub bitrate: String,

    /// Split spec grammar (auto, markers, ranges)
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("downloads")
}
fn default_extension() -> String {
    "m4a".to_string()
}
fn default_codec() -> String {
    "aac".to_string()
}
fn default_bitrate() -> String {
    "192k".to_string()
}
fn default_mode() -> String {
    "auto".to_string()
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
            codec: default_codec(),
            bitrate: default_bitrate(),
            mode: default_mode(),
        }
    }
}

impl SplitConfig {
    pub fn audio_codec(&self) -> Result<AudioCodec, String> {
        self.codec.parse()
    }

    pub fn split_mode(&self) -> Result<SplitMode, String> {
        self.mode.parse()
    }

    /// Extraction settings for the av layer.
    pub fn extract_settings(&self) -> Result<ExtractSettings, String> {
        Ok(ExtractSettings {
            extension: self.extension.clone(),
            codec: self.audio_codec()?,
            bitrate: self.bitrate.clone(),
        })
    }
}
