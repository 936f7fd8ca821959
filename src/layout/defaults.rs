//! Default sizes and settings (pixels and ratios of the page size)

/// Corners at or under this many degrees are callout pointers
pub const POINTER_ANGLE_DEGREES: f64 = 45.0;
/// How tightly the callout body hugs its polygon corners
pub const SMOOTH_FACTOR: f64 = 0.5;
/// Callout text never shrinks below this size
pub const MIN_FONT_SIZE: u32 = 6;
/// Font face used when a style does not name one
pub const FONT_FACE: &str = "sans";

/// Side text box width, as a fraction of the page width
pub const SIDE_BOX_RATIO: f64 = 0.3;
/// Anchor x for west-side text at left, center and right
pub const WEST_ANCHORS: [f64; 3] = [0.05, 0.25, 0.45];
/// Anchor x for east-side text at left, center and right
pub const EAST_ANCHORS: [f64; 3] = [0.55, 0.75, 0.95];
/// Top-anchored side groups start this far down the page
pub const TOP_RATIO: f64 = 0.05;
/// Bottom-anchored side groups end this far down the page
pub const BOTTOM_RATIO: f64 = 0.95;
/// Footer text is indented by this many reference glyphs
pub const FOOTER_MARGIN_GLYPHS: f64 = 2.0;

/// Callout outline stroke width
pub const OUTLINE_WIDTH: f64 = 2.0;

/// (font size, line height) for normal, h1, h2 and h3 text
pub const NORMAL: (u32, u32) = (10, 12);
pub const H1: (u32, u32) = (30, 32);
pub const H2: (u32, u32) = (24, 26);
pub const H3: (u32, u32) = (20, 22);
