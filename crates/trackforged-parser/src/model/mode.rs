//! Split specification grammar selection.

use super::Error;

/// Grammar used to read a split specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SplitMode {
    /// Classify every token and pick the grammar they agree on.
    #[default]
    Auto,
    /// Ordered timestamps used as segment boundaries.
    Markers,
    /// Explicit `start-end[=label]` tokens.
    Ranges,
}

impl std::fmt::Display for SplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitMode::Auto => write!(f, "auto"),
            SplitMode::Markers => write!(f, "markers"),
            SplitMode::Ranges => write!(f, "ranges"),
        }
    }
}

impl std::str::FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(SplitMode::Auto),
            "markers" | "marker" => Ok(SplitMode::Markers),
            "ranges" | "range" => Ok(SplitMode::Ranges),
            _ => Err(format!("unknown split mode: {}", s)),
        }
    }
}

impl SplitMode {
    /// Reject `token` if it cannot appear in this (explicit) mode.
    pub(crate) fn check_token(self, token: &str, is_range: bool) -> Result<(), Error> {
        let ok = match self {
            SplitMode::Auto => true,
            SplitMode::Markers => !is_range,
            SplitMode::Ranges => is_range,
        };
        if ok {
            Ok(())
        } else {
            Err(Error::ModeMismatch {
                token: token.to_string(),
                mode: self,
            })
        }
    }
}
