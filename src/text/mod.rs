//! Text measurement, wrapping and keyword extraction
//!
//! - `metrics`: the font-measurement seam and two built-in metric sets
//! - `wrap`: band-by-band word wrapping and the rectangular fast path
//! - `keywords`: highlight rectangles for keyword occurrences

pub mod keywords;
pub mod metrics;
pub mod wrap;

pub use keywords::{BoundingBox, KeywordIndex, extract_keyword_boxes};
pub use metrics::{Font, MonospaceMetrics, ProportionalMetrics, TextMetrics};
pub use wrap::{Align, PlacedLine, WrapResult, WrappedLine, wrap, wrap_box};
