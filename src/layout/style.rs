//! Text styles and layout configuration

use std::sync::Arc;

use crate::text::Font;
use crate::types::Angle;

use super::defaults;

/// Named text style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Normal,
    H1,
    H2,
    H3,
}

/// Font settings behind a [`Style`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleInfo {
    pub font_size: u32,
    pub line_height: u32,
    pub face: Arc<str>,
}

impl StyleInfo {
    pub fn new(font_size: u32, line_height: u32) -> Self {
        StyleInfo {
            font_size,
            line_height,
            face: Arc::from(defaults::FONT_FACE),
        }
    }

    pub fn with_face(mut self, face: impl Into<Arc<str>>) -> Self {
        self.face = face.into();
        self
    }

    pub fn font(&self) -> Font {
        Font::new(self.face.clone(), self.font_size)
    }

    /// Space between lines beyond the font size
    pub fn leading(&self) -> u32 {
        self.line_height.saturating_sub(self.font_size)
    }

    /// Line height for the same leading at another font size
    pub fn line_height_at(&self, font_size: u32) -> f64 {
        (font_size + self.leading()) as f64
    }
}

/// One [`StyleInfo`] per [`Style`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    normal: StyleInfo,
    h1: StyleInfo,
    h2: StyleInfo,
    h3: StyleInfo,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let info = |(size, line): (u32, u32)| StyleInfo::new(size, line);
        StyleSheet {
            normal: info(defaults::NORMAL),
            h1: info(defaults::H1),
            h2: info(defaults::H2),
            h3: info(defaults::H3),
        }
    }
}

impl StyleSheet {
    pub fn get(&self, style: Style) -> &StyleInfo {
        match style {
            Style::Normal => &self.normal,
            Style::H1 => &self.h1,
            Style::H2 => &self.h2,
            Style::H3 => &self.h3,
        }
    }

    pub fn set(&mut self, style: Style, info: StyleInfo) {
        let slot = match style {
            Style::Normal => &mut self.normal,
            Style::H1 => &mut self.h1,
            Style::H2 => &mut self.h2,
            Style::H3 => &mut self.h3,
        };
        *slot = info;
    }
}

/// Page-wide layout knobs
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Corners at or under this angle are callout pointers
    pub pointer_angle: Angle,
    /// Callout smoothing factor, in (0, 1)
    pub smooth_factor: f64,
    /// Floor for the callout font-shrink loop; 0 is treated as 1
    pub min_font_size: u32,
    pub styles: StyleSheet,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            pointer_angle: Angle::from_degrees(defaults::POINTER_ANGLE_DEGREES),
            smooth_factor: defaults::SMOOTH_FACTOR,
            min_font_size: defaults::MIN_FONT_SIZE,
            styles: StyleSheet::default(),
        }
    }
}

impl LayoutConfig {
    pub fn with_pointer_angle(mut self, angle: Angle) -> Self {
        self.pointer_angle = angle;
        self
    }

    pub fn with_smooth_factor(mut self, alpha: f64) -> Self {
        self.smooth_factor = alpha;
        self
    }

    /// Set the shrink floor; values under 1 px are raised to 1
    pub fn with_min_font_size(mut self, size: u32) -> Self {
        self.min_font_size = size.max(1);
        self
    }

    pub fn with_style(mut self, style: Style, info: StyleInfo) -> Self {
        self.styles.set(style, info);
        self
    }
}
