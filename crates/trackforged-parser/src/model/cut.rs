//! The cut: one labeled time window of the source.

/// A `(start, end, label)` time interval designating one output segment.
///
/// Construction guarantees `0 <= start < end`, both finite. The label may be
/// empty until [`normalize_labels`](crate::normalize_labels) assigns a
/// positional default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cut {
    start: f64,
    end: f64,
    label: String,
}

impl Cut {
    /// Create a cut, or `None` if the window is empty, negative or not finite.
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> Option<Self> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 || end <= start {
            return None;
        }
        Some(Self {
            start,
            end,
            label: label.into(),
        })
    }

    /// Start offset in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End offset in seconds.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Label used in the output file name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Length of the window passed to the media tool, never below 10ms.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.01)
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

impl std::fmt::Display for Cut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            format_offset(self.start),
            format_offset(self.end),
            self.label
        )
    }
}

/// Render seconds as `H:MM:SS.mmm`.
pub fn format_offset(seconds: f64) -> String {
    let millis = (seconds * 1000.0).round() as u64;
    let (secs, ms) = (millis / 1000, millis % 1000);
    format!("{}:{:02}:{:02}.{:03}", secs / 3600, (secs / 60) % 60, secs % 60, ms)
}
