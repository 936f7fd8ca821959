//! Font handles and text measurement

use std::fmt;
use std::sync::Arc;

use crate::types::Size;

/// An opaque font handle: face name plus pixel size
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub face: Arc<str>,
    pub size: u32,
}

impl Font {
    pub fn new(face: impl Into<Arc<str>>, size: u32) -> Self {
        Font { face: face.into(), size }
    }

    /// Same face at another size
    pub fn with_size(&self, size: u32) -> Self {
        Font { face: self.face.clone(), size }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}px", self.face, self.size)
    }
}

/// Pixel measurement of single-line text.
///
/// Implementations must be pure: the same text and font always measure the
/// same. Layout of independent groups may call this from several threads.
pub trait TextMetrics: Sync {
    /// Width and height of `text` set in `font`
    fn measure(&self, text: &str, font: &Font) -> Size;

    fn width(&self, text: &str, font: &Font) -> f64 {
        self.measure(text, font).w
    }

    /// Size of a reference glyph, used for margins and wrap estimates
    fn glyph(&self, font: &Font) -> Size {
        self.measure("A", font)
    }
}

impl<F> TextMetrics for F
where
    F: Fn(&str, &Font) -> Size + Sync,
{
    fn measure(&self, text: &str, font: &Font) -> Size {
        self(text, font)
    }
}

/// Proportional advance widths for printable ASCII, in hundredths of the
/// nominal character width.
#[rustfmt::skip]
const ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Advance for anything outside printable ASCII
const OTHER_ADVANCE: u32 = 100;

/// Sum of advances for `text`, in hundredths of a nominal character
fn advance_units(text: &str) -> u32 {
    text.chars()
        .map(|c| match c {
            ' '..='~' => ADVANCE[(c as usize) - 0x20] as u32,
            _ => OTHER_ADVANCE,
        })
        .sum()
}

/// Table-driven metrics for a generic sans-serif face.
///
/// A nominal character is `char_ratio` times the font size wide; each glyph
/// is scaled from there by its advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalMetrics {
    pub char_ratio: f64,
}

impl Default for ProportionalMetrics {
    fn default() -> Self {
        // 0.08 wide per 0.14 tall
        ProportionalMetrics { char_ratio: 0.08 / 0.14 }
    }
}

impl TextMetrics for ProportionalMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let size = font.size as f64;
        let w = advance_units(text) as f64 * 0.01 * self.char_ratio * size;
        Size::new(w, size)
    }
}

/// Every character advances by `advance_ratio` times the font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_ratio: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        MonospaceMetrics { advance_ratio: 0.5 }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let size = font.size as f64;
        Size::new(text.chars().count() as f64 * self.advance_ratio * size, size)
    }
}
