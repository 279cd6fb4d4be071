//! Parsers producing cut lists.
//!
//! `timecode` is the leaf used by `splits`; `chapters` adapts fetcher
//! metadata; both finish by running `normalize`.

pub mod chapters;
pub mod normalize;
pub mod splits;
pub mod timecode;
