//! # trackforged-av
//!
//! Segment extraction for split audio tracks.
//!
//! This crate provides functionality for:
//! - Cutting a source file into one output file per [`Cut`](trackforged_parser::Cut)
//! - Collision-safe output naming
//! - Locating and checking the external media tool
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use trackforged_av::{actions::SegmentExtractor, get_tool_path, tools::FFMPEG};
//! use trackforged_parser::parse_splits;
//!
//! let ffmpeg = get_tool_path(FFMPEG, None)?;
//! let cuts = parse_splits("0:00-1:00=Intro,1:00-2:00=Verse", None).unwrap();
//!
//! let report = SegmentExtractor::new(ffmpeg).extract(
//!     Path::new("song.m4a"),
//!     Path::new("out"),
//!     "Song",
//!     &cuts,
//! );
//! for path in report.produced() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), trackforged_av::Error>(())
//! ```

mod error;
pub mod actions;
pub mod naming;
pub mod runner;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use naming::{resolve_collision, segment_path};
pub use runner::{SystemRunner, ToolOutput, ToolRunner};
pub use tools::{check_tool, check_tools, get_tool_path, require_tool, ToolInfo};
