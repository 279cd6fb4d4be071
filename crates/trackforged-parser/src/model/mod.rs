//! Data types for parsed split plans.

mod chapter;
mod cut;
mod error;
mod mode;

pub use chapter::{Chapter, SourceMetadata};
pub use cut::Cut;
pub use error::{Error, Result};
pub use mode::SplitMode;
