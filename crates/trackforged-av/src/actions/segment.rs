//! Segment extraction.
//!
//! Each cut is written to its own file. A lossless stream copy is tried
//! first; if it fails or leaves no usable output, the window is re-encoded
//! with a fixed codec and bitrate. A cut that fails both ways is recorded
//! in the report and the remaining cuts still run.

use crate::naming::resolve_collision;
use crate::runner::{SystemRunner, ToolOutput, ToolRunner};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use trackforged_parser::Cut;

/// Codecs available for the re-encode fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioCodec {
    /// AAC (Advanced Audio Coding) - widely compatible
    #[default]
    Aac,
    /// Apple Lossless, fits the m4a container
    Alac,
    /// FLAC (Free Lossless Audio Codec)
    Flac,
    /// Opus
    Opus,
    /// MPEG-1 Layer III
    Mp3,
}

impl AudioCodec {
    /// Get the ffmpeg encoder name.
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            AudioCodec::Aac => "aac",
            AudioCodec::Alac => "alac",
            AudioCodec::Flac => "flac",
            AudioCodec::Opus => "libopus",
            AudioCodec::Mp3 => "libmp3lame",
        }
    }

    /// Lossless encoders take no bitrate.
    pub fn is_lossless(&self) -> bool {
        matches!(self, AudioCodec::Alac | AudioCodec::Flac)
    }
}

impl std::str::FromStr for AudioCodec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aac" => Ok(AudioCodec::Aac),
            "alac" => Ok(AudioCodec::Alac),
            "flac" => Ok(AudioCodec::Flac),
            "opus" | "libopus" => Ok(AudioCodec::Opus),
            "mp3" | "libmp3lame" => Ok(AudioCodec::Mp3),
            _ => Err(format!("Unknown audio codec: {}", s)),
        }
    }
}

/// Output format for extracted segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSettings {
    /// File extension of every segment, without the dot.
    pub extension: String,
    /// Codec used when stream copy fails.
    pub codec: AudioCodec,
    /// Bitrate used when stream copy fails, e.g. `192k`.
    pub bitrate: String,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            extension: "m4a".to_string(),
            codec: AudioCodec::Aac,
            bitrate: "192k".to_string(),
        }
    }
}

/// How a segment was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Lossless stream copy.
    StreamCopy,
    /// Re-encoded with the fallback codec.
    Reencode,
}

/// Result of a single tool invocation for a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// The output is usable.
    Produced,
    /// The tool exited with a failure status.
    ToolFailed { code: Option<i32>, stderr: String },
    /// The tool exited cleanly but the output is missing or empty.
    OutputMissing,
    /// The tool could not be started.
    SpawnFailed(String),
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attempt::Produced => write!(f, "produced"),
            Attempt::ToolFailed { code: Some(c), stderr } if !stderr.is_empty() => {
                write!(f, "exit code {}: {}", c, stderr)
            }
            Attempt::ToolFailed { code: Some(c), .. } => write!(f, "exit code {}", c),
            Attempt::ToolFailed { code: None, .. } => write!(f, "terminated by signal"),
            Attempt::OutputMissing => write!(f, "output missing or empty"),
            Attempt::SpawnFailed(e) => write!(f, "could not start: {}", e),
        }
    }
}

/// A segment written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSegment {
    /// Position of the cut in the input list.
    pub index: usize,
    pub path: PathBuf,
    pub strategy: Strategy,
}

/// A cut for which both extraction attempts failed.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFailure {
    /// Position of the cut in the input list.
    pub index: usize,
    pub label: String,
    /// Path the segment would have been written to.
    pub path: PathBuf,
    pub copy: Attempt,
    pub reencode: Attempt,
}

/// Per-cut outcome of an extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    pub segments: Vec<ExtractedSegment>,
    pub failures: Vec<SegmentFailure>,
}

impl ExtractionReport {
    /// Paths of the produced segments, in cut order.
    pub fn produced(&self) -> Vec<PathBuf> {
        self.segments.iter().map(|s| s.path.clone()).collect()
    }

    /// Whether every cut produced a segment.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives the media tool to cut a source file into segments.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use trackforged_av::actions::SegmentExtractor;
/// use trackforged_parser::parse_splits;
///
/// let cuts = parse_splits("0:00,1:00,2:00", None)?;
/// let extractor = SegmentExtractor::new("ffmpeg");
/// let report = extractor.extract(
///     Path::new("downloads/Album [id].m4a"),
///     Path::new("downloads"),
///     "Album [id]",
///     &cuts,
/// );
/// println!("wrote {} files", report.segments.len());
/// # Ok::<(), trackforged_parser::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SegmentExtractor<R = SystemRunner> {
    program: PathBuf,
    runner: R,
    settings: ExtractSettings,
}

impl SegmentExtractor<SystemRunner> {
    /// Create an extractor that spawns `program` directly.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self::with_runner(program, SystemRunner)
    }
}

impl<R: ToolRunner> SegmentExtractor<R> {
    /// Create an extractor that invokes `program` through `runner`.
    pub fn with_runner(program: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
            settings: ExtractSettings::default(),
        }
    }

    /// Replace the output settings.
    pub fn with_settings(mut self, settings: ExtractSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Arguments for the lossless stream copy of `cut`.
    pub fn copy_args(&self, source: &Path, cut: &Cut, output: &Path) -> Vec<OsString> {
        let mut args = window_args(source, cut);
        args.extend(["-c", "copy"].map(OsString::from));
        args.extend(["-movflags", "+faststart"].map(OsString::from));
        args.push(output.into());
        args
    }

    /// Arguments for the re-encode fallback of `cut`.
    pub fn reencode_args(&self, source: &Path, cut: &Cut, output: &Path) -> Vec<OsString> {
        let mut args = window_args(source, cut);
        args.extend(["-c:a", self.settings.codec.ffmpeg_name()].map(OsString::from));
        if !self.settings.codec.is_lossless() {
            args.extend(["-b:a", self.settings.bitrate.as_str()].map(OsString::from));
        }
        args.extend(["-movflags", "+faststart"].map(OsString::from));
        args.push(output.into());
        args
    }

    /// Extract every cut from `source` into `output_dir`.
    ///
    /// Files are named `"{base_name} - {label}.{ext}"`, numbered on
    /// collision. Cuts are processed strictly in order.
    pub fn extract(
        &self,
        source: &Path,
        output_dir: &Path,
        base_name: &str,
        cuts: &[Cut],
    ) -> ExtractionReport {
        let mut report = ExtractionReport::default();

        for (index, cut) in cuts.iter().enumerate() {
            let path = resolve_collision(
                output_dir,
                base_name,
                cut.label(),
                &self.settings.extension,
                |p| p.exists(),
            );

            match self.extract_one(source, cut, &path) {
                Ok(strategy) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Wrote {}", path.display());
                    report.segments.push(ExtractedSegment {
                        index,
                        path,
                        strategy,
                    });
                }
                Err((copy, reencode)) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(
                        "Failed to create segment {} (copy: {}; re-encode: {})",
                        cut.label(),
                        copy,
                        reencode
                    );
                    report.failures.push(SegmentFailure {
                        index,
                        label: cut.label().to_string(),
                        path,
                        copy,
                        reencode,
                    });
                }
            }
        }

        report
    }

    /// Copy first, then re-encode.
    fn extract_one(
        &self,
        source: &Path,
        cut: &Cut,
        output: &Path,
    ) -> std::result::Result<Strategy, (Attempt, Attempt)> {
        let copy = match self.invoke(&self.copy_args(source, cut, output)) {
            Ok(out) if out.success => {
                if has_content(output) {
                    return Ok(Strategy::StreamCopy);
                }
                Attempt::OutputMissing
            }
            Ok(out) => Attempt::ToolFailed {
                code: out.code,
                stderr: out.stderr,
            },
            Err(e) => Attempt::SpawnFailed(e.to_string()),
        };

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Stream copy failed for {} ({}), re-encoding with {}",
            cut.label(),
            copy,
            self.settings.codec.ffmpeg_name()
        );

        let reencode = match self.invoke(&self.reencode_args(source, cut, output)) {
            Ok(out) if out.success => return Ok(Strategy::Reencode),
            Ok(out) => Attempt::ToolFailed {
                code: out.code,
                stderr: out.stderr,
            },
            Err(e) => Attempt::SpawnFailed(e.to_string()),
        };

        Err((copy, reencode))
    }

    fn invoke(&self, args: &[OsString]) -> std::io::Result<ToolOutput> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Running {} {:?}", self.program.display(), args);

        self.runner.run(&self.program, args)
    }
}

/// Common prefix: quiet, non-interactive, overwrite, seek and limit.
fn window_args(source: &Path, cut: &Cut) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-v", "error", "-nostdin", "-y"]
        .map(OsString::from)
        .into();
    args.push("-ss".into());
    args.push(cut.start().to_string().into());
    args.push("-t".into());
    args.push(cut.duration().to_string().into());
    args.push("-i".into());
    args.push(source.into());
    args
}

fn has_content(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}
