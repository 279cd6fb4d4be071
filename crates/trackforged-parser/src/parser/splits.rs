//! Split specification parser.
//!
//! A specification is a list of tokens separated by commas, semicolons or
//! newlines. Either every token is a timecode marker, or every token is a
//! `start-end[=label]` range.

use std::borrow::Cow;
use std::path::PathBuf;

use super::normalize::normalize_labels;
use super::timecode::parse_timecode;
use crate::label::safe_label;
use crate::{Cut, Error, Result, SplitMode};

/// Parse a split specification, selecting the grammar automatically.
///
/// `spec` may be `@path` to read the specification from a file.
/// `known_duration` is the source length in seconds, used for open-ended
/// ranges and the trailing marker segment.
///
/// ```
/// use trackforged_parser::parse_splits;
///
/// let cuts = parse_splits("0:00,1:00,2:00", None)?;
/// assert_eq!(cuts.len(), 2);
/// assert_eq!(cuts[1].label(), "part02");
/// # Ok::<(), trackforged_parser::Error>(())
/// ```
pub fn parse_splits(spec: &str, known_duration: Option<f64>) -> Result<Vec<Cut>> {
    parse_splits_with(spec, known_duration, SplitMode::Auto)
}

/// Parse a split specification using an explicit grammar.
pub fn parse_splits_with(
    spec: &str,
    known_duration: Option<f64>,
    mode: SplitMode,
) -> Result<Vec<Cut>> {
    let text = resolve_spec(spec)?;
    parse_spec_text(&text, known_duration, mode)
}

/// Return the specification text, loading it from disk for `@path`.
pub fn resolve_spec(spec: &str) -> Result<Cow<'_, str>> {
    let spec = spec.trim();
    match spec.strip_prefix('@') {
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::read_to_string(&path)
                .map(Cow::Owned)
                .map_err(|source| Error::SpecFile { path, source })
        }
        None => Ok(Cow::Borrowed(spec)),
    }
}

/// Parse already-resolved specification text.
pub fn parse_spec_text(
    text: &str,
    known_duration: Option<f64>,
    mode: SplitMode,
) -> Result<Vec<Cut>> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(Error::NoTokens);
    }

    let mut cuts = match classify(&tokens, mode)? {
        SplitMode::Ranges => parse_ranges(&tokens, known_duration)?,
        _ => parse_markers(&tokens, known_duration)?,
    };

    normalize_labels(&mut cuts);
    Ok(cuts)
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| matches!(c, ',' | ';' | '\n'))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

fn looks_like_range(token: &str) -> bool {
    token.contains('-') || token.contains('=')
}

/// With markers requested explicitly, a leading `-` is a negative timecode
/// rather than a range, so it can be discarded later.
fn is_marker_token(token: &str) -> bool {
    !token.contains('=') && parse_timecode(token).is_ok()
}

/// Decide the grammar for the whole token list.
///
/// Every token is classified on its own first; a list that mixes both kinds
/// is rejected instead of being forced into one grammar.
fn classify(tokens: &[&str], mode: SplitMode) -> Result<SplitMode> {
    if mode != SplitMode::Auto {
        for token in tokens {
            let is_range = match mode {
                SplitMode::Markers => !is_marker_token(token),
                _ => looks_like_range(token),
            };
            mode.check_token(token, is_range)?;
        }
        return Ok(mode);
    }

    let ranges = tokens.iter().filter(|t| looks_like_range(t)).count();
    if ranges == tokens.len() {
        Ok(SplitMode::Ranges)
    } else if ranges == 0 {
        Ok(SplitMode::Markers)
    } else {
        Err(Error::MixedModes)
    }
}

fn parse_ranges(tokens: &[&str], known_duration: Option<f64>) -> Result<Vec<Cut>> {
    let mut cuts = Vec::with_capacity(tokens.len());

    for &token in tokens {
        let (range_part, label) = token.split_once('=').unwrap_or((token, ""));
        let (start_s, end_s) = range_part
            .split_once('-')
            .map(|(a, b)| (a.trim(), b.trim()))
            .ok_or_else(|| Error::InvalidRange {
                token: token.to_string(),
            })?;

        if start_s.is_empty() {
            return Err(Error::InvalidRange {
                token: token.to_string(),
            });
        }
        let start = parse_timecode(start_s)?;

        let end = if end_s.is_empty() || end_s.eq_ignore_ascii_case("end") {
            known_duration.ok_or_else(|| Error::UnknownDuration {
                token: token.to_string(),
            })?
        } else {
            parse_timecode(end_s)?
        };

        let label = if label.is_empty() {
            String::new()
        } else {
            safe_label(label)
        };

        let cut = Cut::new(start, end, label).ok_or_else(|| Error::EmptyRange {
            token: token.to_string(),
        })?;
        cuts.push(cut);
    }

    Ok(cuts)
}

fn parse_markers(tokens: &[&str], known_duration: Option<f64>) -> Result<Vec<Cut>> {
    let mut markers = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value = parse_timecode(token)?;
        if value >= 0.0 {
            markers.push(value);
        }
    }
    markers.sort_by(f64::total_cmp);

    let last = match markers.as_slice() {
        [_, .., last] => *last,
        _ => return Err(Error::TooFewMarkers),
    };

    let duration = known_duration.unwrap_or(last);

    // Repeated markers yield zero-length windows, which Cut::new drops.
    let mut cuts: Vec<Cut> = markers
        .windows(2)
        .filter_map(|pair| Cut::new(pair[0], pair[1], ""))
        .collect();

    if last < duration {
        cuts.extend(Cut::new(last, duration, ""));
    }

    Ok(cuts)
}
