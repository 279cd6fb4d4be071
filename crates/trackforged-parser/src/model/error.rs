//! Error types for trackforged-parser.

use std::path::PathBuf;

use super::SplitMode;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while turning a split specification into cuts.
///
/// `InvalidTimecode` covers a single malformed timecode token. Every other
/// variant describes a malformed specification as a whole; see
/// [`Error::is_spec_error`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A timecode token was empty or not numeric.
    #[error("invalid timecode {token:?}: {reason}")]
    InvalidTimecode { token: String, reason: String },

    /// The specification contained no tokens after splitting.
    #[error("split spec has no tokens")]
    NoTokens,

    /// Markers mode needs two boundaries to define a segment.
    #[error("need at least two markers to define segments")]
    TooFewMarkers,

    /// A range extends to the end of the file but the duration is unknown.
    #[error("end not specified and duration unknown; cannot infer end: {token}")]
    UnknownDuration { token: String },

    /// A range token did not have the `start-end` shape.
    #[error("invalid range: {token}")]
    InvalidRange { token: String },

    /// A range ended at or before its start.
    #[error("end must be > start: {token}")]
    EmptyRange { token: String },

    /// Marker tokens and range tokens were mixed in one specification.
    #[error("split spec mixes markers and ranges")]
    MixedModes,

    /// A token did not belong to the explicitly requested mode.
    #[error("token {token:?} is not valid in {mode} mode")]
    ModeMismatch { token: String, mode: SplitMode },

    /// An `@file` specification could not be read.
    #[error("failed to read split spec file {}: {source}", path.display())]
    SpecFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid timecode error.
    pub fn invalid_timecode(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimecode {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a specification-level error rather than a bad timecode.
    pub fn is_spec_error(&self) -> bool {
        !matches!(self, Error::InvalidTimecode { .. })
    }
}
