//! # trackforged-parser
//!
//! Turns a compact split specification, or a source's chapter metadata,
//! into an ordered list of labeled [`Cut`]s.
//!
//! Two grammars are accepted:
//! - markers: `"0:00,1:23,3:45,5:00"`
//! - ranges: `"0:00-1:23=Intro,1:23-3:45=Verse,3:45-end=Outro"`
//!
//! ## Quick Start
//!
//! ```
//! use trackforged_parser::parse_splits;
//!
//! let cuts = parse_splits("0:00-1:00=Intro,1:00-end=Outro", Some(180.0))?;
//!
//! assert_eq!(cuts.len(), 2);
//! assert_eq!(cuts[0].label(), "Intro");
//! assert_eq!(cuts[1].end(), 180.0);
//! # Ok::<(), trackforged_parser::Error>(())
//! ```
//!
//! ## Chapters
//!
//! ```
//! use trackforged_parser::{chapters_to_cuts, Chapter, SourceMetadata};
//!
//! let meta = SourceMetadata {
//!     title: Some("Live Set".into()),
//!     duration: Some(300.0),
//!     chapters: vec![Chapter::starting_at(0.0), Chapter::starting_at(120.0)],
//!     ..Default::default()
//! };
//!
//! let cuts = chapters_to_cuts(&meta);
//! assert_eq!(cuts[1].label(), "02 - part02");
//! ```

pub mod label;
pub mod model;
mod parser;

pub use label::safe_label;
pub use model::{Chapter, Cut, Error, Result, SourceMetadata, SplitMode};
pub use parser::chapters::chapters_to_cuts;
pub use parser::normalize::normalize_labels;
pub use parser::splits::{parse_spec_text, parse_splits, parse_splits_with, resolve_spec};
pub use parser::timecode::parse_timecode;
