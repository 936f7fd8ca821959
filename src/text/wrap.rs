//! Greedy word wrapping into a sequence of bands
//!
//! Words are whitespace-separated and always kept whole. Each band takes as
//! many words as fit its width, measured in pixels with the font metrics.

use crate::errors::{Error, Result};
use crate::geometry::Band;
use crate::log::debug;
use crate::types::{Point, Size, pt};

use super::metrics::{Font, TextMetrics};

/// Horizontal alignment of a line within its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// One line of wrapped text and the band it occupies
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub band: Band,
    /// Measured pixel width of `text`
    pub width: f64,
}

/// A line positioned on the canvas, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Top-left corner of the line
    pub origin: Point,
    pub width: f64,
    /// Height of the band the line sits in
    pub height: f64,
}

/// Output of wrapping one text item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrapResult {
    pub lines: Vec<WrappedLine>,
    /// Widest line by the vertical span of the used bands
    pub size: Size,
}

impl WrapResult {
    fn from_lines(lines: Vec<WrappedLine>) -> Self {
        let size = match (lines.first(), lines.last()) {
            (Some(first), Some(last)) => Size::new(
                lines.iter().map(|l| l.width).fold(0.0, f64::max),
                last.band.y_bottom - first.band.y_top,
            ),
            _ => Size::ZERO,
        };
        WrapResult { lines, size }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The wrapped text with one `\n` per line break
    pub fn text(&self) -> String {
        self.lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n")
    }

    /// The same lines, every band moved by `offset`
    pub fn translated(mut self, offset: Point) -> WrapResult {
        for line in &mut self.lines {
            let b = line.band;
            line.band = Band::new(
                b.x_start + offset.x,
                b.y_top + offset.y,
                b.y_bottom + offset.y,
                b.width,
            );
        }
        self
    }

    /// Position every line inside its band
    pub fn place(&self, align: Align) -> Vec<PlacedLine> {
        self.lines
            .iter()
            .map(|line| {
                let band = &line.band;
                let x = match align {
                    Align::Left => band.x_start,
                    Align::Center => band.x_start + (band.width - line.width) / 2.0,
                    Align::Right => band.x_end() - line.width,
                };
                PlacedLine {
                    text: line.text.clone(),
                    origin: pt(x, band.y_top),
                    width: line.width,
                    height: band.height(),
                }
            })
            .collect()
    }
}

/// What to do with a word wider than the band it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Oversize {
    /// Leave the band empty and try the next one
    SkipBand,
    /// Put the word on the band anyway, alone
    Overflow,
}

fn fill_bands<M, I>(
    words: &[&str],
    bands: I,
    metrics: &M,
    font: &Font,
    oversize: Oversize,
) -> Result<WrapResult>
where
    M: TextMetrics + ?Sized,
    I: IntoIterator<Item = Band>,
{
    let mut next = 0;
    let mut lines = Vec::new();

    for band in bands {
        if next == words.len() {
            break;
        }

        let mut text = String::new();
        let mut width = 0.0;
        while let Some(word) = words.get(next) {
            let candidate = if text.is_empty() {
                (*word).to_string()
            } else {
                format!("{text} {word}")
            };
            let w = metrics.width(&candidate, font);
            let fits = w <= band.width || (text.is_empty() && oversize == Oversize::Overflow);
            if !fits {
                break;
            }
            text = candidate;
            width = w;
            next += 1;
        }

        if !text.is_empty() {
            lines.push(WrappedLine { text, band, width });
        }
    }

    if next < words.len() {
        return Err(Error::OutOfBounds {
            placed: next,
            remaining: words.len() - next,
        });
    }

    Ok(WrapResult::from_lines(lines))
}

/// Wrap `text` into `bands`, in order.
///
/// A band too narrow for the next word is left empty. Bands left over once
/// the text runs out are unused. Running out of bands first is
/// [`Error::OutOfBounds`].
pub fn wrap<M, I>(text: &str, bands: I, metrics: &M, font: &Font) -> Result<WrapResult>
where
    M: TextMetrics + ?Sized,
    I: IntoIterator<Item = Band>,
{
    let words: Vec<&str> = text.split_whitespace().collect();
    fill_bands(&words, bands, metrics, font, Oversize::SkipBand)
}

/// Greedy wrap by character count, the way a fixed-width estimate would
fn wrap_by_chars(words: &[&str], max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in words {
        let word_chars = word.chars().count();
        if !current.is_empty() && current_chars + 1 + word_chars > max_chars {
            lines.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` into a rectangular box of `box_width` whose first line
/// starts at `origin`.
///
/// Boxes grow downwards without limit, so this never fails for lack of
/// room; a word wider than the box gets a line of its own. The line count
/// is first estimated from the reference glyph width and only measured word
/// by word when the estimate produces a line that does not actually fit.
pub fn wrap_box<M>(
    text: &str,
    origin: Point,
    box_width: f64,
    line_height: f64,
    metrics: &M,
    font: &Font,
) -> Result<WrapResult>
where
    M: TextMetrics + ?Sized,
{
    let words: Vec<&str> = text.split_whitespace().collect();
    let band_at = |k: usize| {
        let y_top = origin.y + k as f64 * line_height;
        Band::new(origin.x, y_top, y_top + line_height, box_width)
    };

    let whole = words.join(" ");
    let whole_width = metrics.width(&whole, font);
    if whole_width <= box_width || words.len() <= 1 {
        if words.is_empty() {
            return Ok(WrapResult::default());
        }
        return Ok(WrapResult::from_lines(vec![WrappedLine {
            text: whole,
            band: band_at(0),
            width: whole_width,
        }]));
    }

    let glyph = metrics.glyph(font).w;
    if glyph > 0.0 {
        let max_chars = ((box_width / glyph).floor() as usize).max(1);
        let estimate = wrap_by_chars(&words, max_chars);
        let measured: Vec<f64> = estimate.iter().map(|l| metrics.width(l, font)).collect();
        if measured.iter().all(|&w| w <= box_width) {
            debug!(lines = estimate.len(), max_chars, "box wrap estimate fits");
            let lines = estimate
                .into_iter()
                .zip(measured)
                .enumerate()
                .map(|(k, (text, width))| WrappedLine { text, band: band_at(k), width })
                .collect();
            return Ok(WrapResult::from_lines(lines));
        }
    }

    debug!(words = words.len(), "box wrap estimate overflowed, measuring per word");
    fill_bands(&words, (0..).map(band_at), metrics, font, Oversize::Overflow)
}
