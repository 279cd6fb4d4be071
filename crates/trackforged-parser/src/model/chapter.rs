//! Metadata supplied by the content fetcher for one source.

/// One chapter entry as reported by the content fetcher.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_time: Option<f64>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub end_time: Option<f64>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
}

impl Chapter {
    /// An untitled chapter with only a start time.
    pub fn starting_at(start_time: f64) -> Self {
        Self {
            start_time: Some(start_time),
            ..Default::default()
        }
    }

    /// Set the chapter title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the chapter end time.
    pub fn with_end(mut self, end_time: f64) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

/// Description of a fetched source: identity, length and chapter list.
///
/// Mirrors the subset of the fetcher's info JSON that splitting needs;
/// unknown fields are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceMetadata {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,

    /// Total length in seconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<f64>,

    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_empty"))]
    pub chapters: Vec<Chapter>,
}

#[cfg(feature = "serde")]
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Chapter>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<Vec<Chapter>>::deserialize(deserializer)?.unwrap_or_default())
}
