//! Callout geometry and text wrapping for annotated images.
//!
//! A callout is a closed polygon with one sharp pointer corner. [`smooth_points`]
//! turns it into a rounded outline that keeps the pointer sharp, [`wrap`]
//! fills the interior with text band by band, and [`extract_keyword_boxes`]
//! finds the rectangles a highlight pass should paint.
//!
//! [`Page`] ties these together with footer and side columns into a
//! [`PageLayout`]: shapes, positioned text runs and keyword rectangles,
//! ready for an external rasterizer.
//!
//! ```
//! use balloon::{MonospaceMetrics, Page, Placement, Polygon, TextItem};
//!
//! let pointer = Polygon::from_xy(&[
//!     (100.0, 300.0),
//!     (200.0, 250.0),
//!     (300.0, 100.0),
//!     (500.0, 100.0),
//!     (500.0, 300.0),
//!     (300.0, 300.0),
//! ])?;
//! let items = vec![
//!     TextItem::new(0, "Look over here").at(Placement::Callout(pointer)),
//!     TextItem::new(1, "A footer note"),
//! ];
//! let page = Page::new(640.0, 480.0).layout(&items, &MonospaceMetrics::default())?;
//! assert_eq!(page.texts.len(), 2);
//! # Ok::<(), balloon::Error>(())
//! ```

pub mod errors;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod text;
pub mod types;

pub use errors::{Error, ErrorKind, Result};
pub use geometry::{
    Band, ControlPointPair, EdgeKind, SmoothedOutline, band_width, control_points, smooth_points,
};
pub use layout::{
    Color, LayoutConfig, Page, PageLayout, Placement, Shape, Side, Style, StyleInfo, TextItem,
    TextRun,
};
pub use text::{
    Align, BoundingBox, Font, KeywordIndex, MonospaceMetrics, ProportionalMetrics, TextMetrics,
    WrapResult, extract_keyword_boxes, wrap, wrap_box,
};
pub use types::{Angle, Point, Polygon, Rect, Size, pt};
