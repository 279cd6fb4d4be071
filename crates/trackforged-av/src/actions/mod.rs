//! Media processing actions.

mod segment;

pub use segment::{
    Attempt, AudioCodec, ExtractSettings, ExtractedSegment, ExtractionReport, SegmentExtractor,
    SegmentFailure, Strategy,
};
