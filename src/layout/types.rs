//! Core types for page layout: what goes in, what comes out

use std::fmt;

use crate::text::{Font, KeywordIndex};
use crate::types::{Point, Polygon, Rect};

use super::defaults;
use super::style::Style;

/// Pass-through color; parsing and blending belong to the rasterizer
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// Which half of the page a side group belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XLocation {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YLocation {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Where a text item goes on the page
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Placement {
    /// Inside a callout drawn from this polygon
    Callout(Polygon),
    /// Stacked along the bottom edge of the page
    #[default]
    Footer,
    /// In a column on one half of the page
    Side { side: Side, x: XLocation, y: YLocation },
}

/// Outline stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            width: defaults::OUTLINE_WIDTH,
            color: Color::WHITE,
        }
    }
}

/// One piece of text to lay out
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    /// Ordering key within a group
    pub index: usize,
    pub value: String,
    pub keywords: Vec<String>,
    pub placement: Placement,
    pub style: Style,
    pub fg: Color,
    pub bg: Option<Color>,
    pub outline: Stroke,
}

impl TextItem {
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        TextItem {
            index,
            value: value.into(),
            keywords: Vec::new(),
            placement: Placement::default(),
            style: Style::default(),
            fg: Color::WHITE,
            bg: None,
            outline: Stroke::default(),
        }
    }

    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn at(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn colored(mut self, fg: Color, bg: Option<Color>) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    pub fn outlined(mut self, outline: Stroke) -> Self {
        self.outline = outline;
        self
    }
}

/// A background shape, drawn beneath all text
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Smoothed callout outline
    Outline {
        points: Vec<Point>,
        fill: Option<Color>,
        stroke: Stroke,
    },
    /// Filled rectangle behind a footer or side group
    Rect { rect: Rect, fill: Color },
}

/// One line of text at its final position
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner
    pub origin: Point,
    pub font: Font,
    pub color: Color,
}

/// Everything a rasterizer needs to draw a page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    /// Background layer, in drawing order
    pub shapes: Vec<Shape>,
    /// Text layer, in drawing order
    pub texts: Vec<TextRun>,
    /// Keyword rectangles for the highlight layer
    pub highlights: KeywordIndex,
}

impl PageLayout {
    /// Whether a separate highlighted rendering is worth producing
    pub fn has_highlights(&self) -> bool {
        !self.highlights.is_empty()
    }
}
