//! External tool discovery.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the media tool used for segment extraction.
pub const FFMPEG: &str = "ffmpeg";

/// Availability report for one external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool ran successfully.
    pub available: bool,
    /// Version number parsed from the banner, e.g. `6.1.1`.
    pub version: Option<String>,
    /// Resolved executable path.
    pub path: Option<PathBuf>,
}

/// Run `program -version` and report what was found.
///
/// ```no_run
/// use trackforged_av::check_tool;
///
/// let info = check_tool("ffmpeg");
/// if info.available {
///     println!("ffmpeg {:?}", info.version);
/// }
/// ```
pub fn check_tool(program: impl AsRef<Path>) -> ToolInfo {
    let program = program.as_ref();
    let name = program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string());

    match Command::new(program).arg("-version").output() {
        Ok(output) if output.status.success() => {
            let banner = String::from_utf8_lossy(&output.stdout);
            ToolInfo {
                name,
                available: true,
                version: banner.lines().next().and_then(parse_version),
                path: which::which(program).ok(),
            }
        }
        _ => ToolInfo {
            name,
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Check the tools the splitter relies on, honoring a configured ffmpeg.
pub fn check_tools(ffmpeg: Option<&Path>) -> Vec<ToolInfo> {
    let ffprobe = ffmpeg
        .and_then(|p| p.parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join("ffprobe"))
        .unwrap_or_else(|| PathBuf::from("ffprobe"));

    vec![
        check_tool(ffmpeg.unwrap_or(Path::new(FFMPEG))),
        check_tool(ffprobe),
    ]
}

/// Require that a tool is on `PATH`, returning its location.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the lookup fails.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Resolve a tool, preferring a configured location over a `PATH` lookup.
///
/// A configured value that is a bare name (no directory part) is itself
/// looked up on `PATH`.
pub fn get_tool_path(name: &str, configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(path) if path.components().count() > 1 => {
            if path.exists() {
                Ok(path.to_path_buf())
            } else {
                Err(Error::tool_not_found(path.display().to_string()))
            }
        }
        Some(bare) => which::which(bare).map_err(|_| Error::tool_not_found(bare.display().to_string())),
        None => require_tool(name),
    }
}

/// Pull the version out of a banner such as `ffmpeg version 6.1.1-3ubuntu5 Copyright ...`.
fn parse_version(banner: &str) -> Option<String> {
    let mut words = banner.split_whitespace();
    words.find(|w| *w == "version")?;
    let raw = words.next()?;
    let version: String = raw
        .trim_start_matches('n')
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if version.is_empty() {
        Some(raw.to_string())
    } else {
        Some(version)
    }
}
