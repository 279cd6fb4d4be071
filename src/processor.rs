//! Split orchestration: choose the cut source, then extract.

use crate::source::Source;
use std::path::PathBuf;
use trackforged_av::actions::{ExtractionReport, SegmentExtractor};
use trackforged_av::{SystemRunner, ToolRunner};
use trackforged_parser::{chapters_to_cuts, parse_splits_with, Cut, SourceMetadata, SplitMode};

/// Where cuts come from for each source.
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Split spec (or `@file`); takes precedence over chapters.
    pub spec: Option<String>,
    pub mode: SplitMode,
    /// Fall back to chapter metadata when no spec is given.
    pub from_chapters: bool,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

/// What happened to one source.
#[derive(Debug)]
pub enum SourceOutcome {
    /// No cuts were available; nothing was attempted.
    Skipped { source: String, reason: String },
    /// The plan was computed but not executed.
    Planned { source: String, cuts: Vec<Cut> },
    /// Extraction ran.
    Extracted {
        source: String,
        report: ExtractionReport,
    },
}

/// Compute the cut list for a source.
///
/// An explicit spec wins over chapters. An empty list means there is
/// nothing to split.
pub fn plan_cuts(
    options: &SplitOptions,
    meta: &SourceMetadata,
) -> trackforged_parser::Result<Vec<Cut>> {
    if let Some(ref spec) = options.spec {
        return parse_splits_with(spec, meta.duration, options.mode);
    }
    if options.from_chapters {
        return Ok(chapters_to_cuts(meta));
    }
    Ok(Vec::new())
}

/// Splits sources one after another.
pub struct SplitProcessor<R = SystemRunner> {
    extractor: SegmentExtractor<R>,
    options: SplitOptions,
}

impl<R: ToolRunner> SplitProcessor<R> {
    pub fn new(extractor: SegmentExtractor<R>, options: SplitOptions) -> Self {
        Self { extractor, options }
    }

    /// Process every source; a bad spec or missing cuts skips only that source.
    pub fn run(&self, sources: &[Source]) -> Vec<SourceOutcome> {
        sources.iter().map(|s| self.process(s)).collect()
    }

    pub fn process(&self, source: &Source) -> SourceOutcome {
        let name = source.display_id();

        let cuts = match plan_cuts(&self.options, &source.metadata) {
            Ok(cuts) => cuts,
            Err(e) => {
                let kind = if e.is_spec_error() {
                    "bad split spec"
                } else {
                    "bad timecode in split spec"
                };
                tracing::error!("{} for {}: {}", kind, name, e);
                return SourceOutcome::Skipped {
                    source: name,
                    reason: format!("{}: {}", kind, e),
                };
            }
        };

        if cuts.is_empty() {
            let reason = if self.options.spec.is_none() && self.options.from_chapters {
                format!("no chapters found for {}; nothing to split", name)
            } else {
                format!("no cuts for {}; nothing to split", name)
            };
            tracing::warn!("{}", reason);
            return SourceOutcome::Skipped {
                source: name,
                reason,
            };
        }

        if self.options.dry_run {
            tracing::info!("[DRY RUN] Would split {} into {} segment(s)", name, cuts.len());
            return SourceOutcome::Planned { source: name, cuts };
        }

        tracing::info!("Splitting {} into {} segment(s)", name, cuts.len());
        let report = self.extractor.extract(
            &source.audio,
            &self.options.output_dir,
            &source.base_name(),
            &cuts,
        );

        if report.segments.is_empty() {
            tracing::warn!("No segments were created for {}", name);
        } else {
            tracing::info!("Created {} file(s) for {}", report.segments.len(), name);
        }

        SourceOutcome::Extracted {
            source: name,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackforged_parser::Chapter;

    fn meta() -> SourceMetadata {
        SourceMetadata {
            id: Some("abc".into()),
            title: Some("Set".into()),
            duration: Some(180.0),
            chapters: vec![
                Chapter::starting_at(0.0).with_title("A"),
                Chapter::starting_at(90.0).with_title("B"),
            ],
        }
    }

    #[test]
    fn test_spec_wins_over_chapters() {
        let options = SplitOptions {
            spec: Some("0:00-0:30=X".into()),
            from_chapters: true,
            ..Default::default()
        };
        let cuts = plan_cuts(&options, &meta()).unwrap();
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].label(), "X");
    }

    #[test]
    fn test_chapters_when_requested() {
        let options = SplitOptions {
            from_chapters: true,
            ..Default::default()
        };
        let cuts = plan_cuts(&options, &meta()).unwrap();
        let labels: Vec<_> = cuts.iter().map(Cut::label).collect();
        assert_eq!(labels, vec!["01 - A", "02 - B"]);
    }

    #[test]
    fn test_nothing_requested() {
        let cuts = plan_cuts(&SplitOptions::default(), &meta()).unwrap();
        assert!(cuts.is_empty());
    }

    #[test]
    fn test_spec_uses_metadata_duration() {
        let options = SplitOptions {
            spec: Some("0:00,1:00".into()),
            ..Default::default()
        };
        let cuts = plan_cuts(&options, &meta()).unwrap();
        assert_eq!(cuts.last().unwrap().end(), 180.0);
    }

    #[test]
    fn test_bad_spec_skips_source() {
        let processor = SplitProcessor::new(
            SegmentExtractor::new("nonexistent_tool_12345"),
            SplitOptions {
                spec: Some("1:00".into()),
                ..Default::default()
            },
        );
        let source = Source {
            audio: PathBuf::from("in.m4a"),
            metadata: meta(),
        };
        match processor.process(&source) {
            SourceOutcome::Skipped { reason, .. } => {
                assert!(reason.starts_with("bad split spec:"), "{reason}")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_bad_timecode_reason() {
        let processor = SplitProcessor::new(
            SegmentExtractor::new("nonexistent_tool_12345"),
            SplitOptions {
                spec: Some("0:00,abc".into()),
                ..Default::default()
            },
        );
        let source = Source {
            audio: PathBuf::from("in.m4a"),
            metadata: meta(),
        };
        match processor.process(&source) {
            SourceOutcome::Skipped { reason, .. } => {
                assert!(reason.starts_with("bad timecode in split spec:"), "{reason}")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_plans_only() {
        let processor = SplitProcessor::new(
            SegmentExtractor::new("nonexistent_tool_12345"),
            SplitOptions {
                from_chapters: true,
                dry_run: true,
                ..Default::default()
            },
        );
        let source = Source {
            audio: PathBuf::from("in.m4a"),
            metadata: meta(),
        };
        match processor.process(&source) {
            SourceOutcome::Planned { cuts, .. } => assert_eq!(cuts.len(), 2),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
