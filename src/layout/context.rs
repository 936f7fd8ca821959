//! Rendering context - collects the output of one layout group
//!
//! Each group gets a fresh context; the page merges them in group order.
//! Nothing is shared between groups while they are being laid out.

use crate::text::{Font, KeywordIndex, PlacedLine};
use crate::types::{Rect, pt};

use super::types::{Color, PageLayout, Shape, TextRun};

/// Drawable output of a layout group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// Background shapes in drawing order
    pub shapes: Vec<Shape>,
    /// Text lines in drawing order
    pub texts: Vec<TextRun>,
    /// Keyword rectangles found in `texts`
    pub highlights: KeywordIndex,
    /// Extent of all text placed so far
    pub bounds: Rect,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add placed lines as text runs and grow the bounds around them
    pub fn add_lines(&mut self, lines: &[PlacedLine], font: &Font, color: &Color) {
        for line in lines {
            self.bounds.expand_point(line.origin);
            self.bounds
                .expand_point(pt(line.origin.x + line.width, line.origin.y + line.height));
            self.texts.push(TextRun {
                text: line.text.clone(),
                origin: line.origin,
                font: font.clone(),
                color: color.clone(),
            });
        }
    }

    pub fn add_highlights(&mut self, highlights: KeywordIndex) {
        self.highlights.merge(highlights);
    }

    /// Append `other` after everything already collected
    pub fn merge(&mut self, other: RenderContext) {
        self.shapes.extend(other.shapes);
        self.texts.extend(other.texts);
        self.highlights.merge(other.highlights);
        self.bounds.expand_rect(&other.bounds);
    }

    pub fn into_page(self, width: f64, height: f64) -> PageLayout {
        PageLayout {
            width,
            height,
            shapes: self.shapes,
            texts: self.texts,
            highlights: self.highlights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BoundingBox;

    fn line(text: &str, x: f64, y: f64) -> PlacedLine {
        PlacedLine {
            text: text.to_string(),
            origin: pt(x, y),
            width: 50.0,
            height: 12.0,
        }
    }

    #[test]
    fn lines_grow_bounds() {
        let mut ctx = RenderContext::new();
        assert!(ctx.bounds.is_empty());
        let lines = [line("a", 10.0, 20.0), line("b", 0.0, 32.0)];
        ctx.add_lines(&lines, &Font::new("sans", 10), &Color::BLACK);
        assert_eq!(ctx.texts.len(), 2);
        assert_eq!(ctx.bounds, Rect::new(0.0, 20.0, 60.0, 44.0));
    }

    #[test]
    fn merge_keeps_order() {
        let font = Font::new("sans", 10);
        let mut first = RenderContext::new();
        first.add_lines(&[line("first", 0.0, 0.0)], &font, &Color::BLACK);
        let mut second = RenderContext::new();
        second.add_lines(&[line("second", 0.0, 100.0)], &font, &Color::BLACK);
        let mut hl = KeywordIndex::new();
        hl.insert(BoundingBox {
            keyword: "second".into(),
            left: -1.0,
            top: 100.0,
            right: 50.0,
            bottom: 112.0,
        });
        second.add_highlights(hl);

        first.merge(second);
        let texts: Vec<_> = first.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(first.highlights.len(), 1);
        assert_eq!(first.bounds, Rect::new(0.0, 0.0, 50.0, 112.0));
    }
}
