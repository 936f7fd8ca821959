//! Geometric primitives shared by the geometry, text and layout engines.
//!
//! Coordinates are image pixels with Y growing downwards.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::{Error, Result};

/// A point in pixel space
pub type Point = DVec2;

/// Shorthand constructor for a [`Point`]
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    dvec2(x, y)
}

/// An angle, stored in radians
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    /// A right angle; the convention for degenerate corners.
    pub const RIGHT: Angle = Angle(std::f64::consts::FRAC_PI_2);

    #[inline]
    pub fn from_radians(rad: f64) -> Angle {
        Angle(rad)
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Angle {
        Angle(deg.to_radians())
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.degrees())
    }
}

/// 2D size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }
}

/// Axis-aligned rectangle in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Rect {
    fn default() -> Self {
        Rect::empty()
    }
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect { left, top, right, bottom }
    }

    /// Create an empty rectangle (will expand on first point)
    pub fn empty() -> Self {
        Rect {
            left: f64::MAX,
            top: f64::MAX,
            right: f64::MIN,
            bottom: f64::MIN,
        }
    }

    /// Check if the rectangle was never expanded
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.left = self.left.min(p.x);
        self.top = self.top.min(p.y);
        self.right = self.right.max(p.x);
        self.bottom = self.bottom.max(p.y);
    }

    /// Expand to include another rectangle
    pub fn expand_rect(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        self.expand_point(pt(other.left, other.top));
        self.expand_point(pt(other.right, other.bottom));
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A closed polygon of at least three finite points.
///
/// The last point connects back to the first; it is not repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Validate and wrap a point list
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::TooFewPoints { count: points.len() });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index });
        }
        Ok(Polygon { points })
    }

    /// Build from `(x, y)` pairs
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| pt(x, y)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertex `i`, wrapping around in both directions
    pub fn vertex(&self, i: isize) -> Point {
        let n = self.points.len() as isize;
        self.points[i.rem_euclid(n) as usize]
    }

    /// Edges as `(start, end)` pairs, closing edge last
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Indices `i` whose edge `(i, i+1)` has zero length
    pub fn degenerate_edges(&self) -> Vec<usize> {
        self.edges()
            .enumerate()
            .filter(|(_, (a, b))| a == b)
            .map(|(i, _)| i)
            .collect()
    }

    /// A copy with vertex `index` removed, if at least three points remain
    pub fn without_vertex(&self, index: usize) -> Option<Polygon> {
        if self.points.len() <= 3 || index >= self.points.len() {
            return None;
        }
        let mut points = self.points.clone();
        points.remove(index);
        Some(Polygon { points })
    }

    /// Mean of the vertices
    pub fn centroid(&self) -> Point {
        self.points.iter().copied().sum::<Point>() / self.points.len() as f64
    }

    /// Bounding rectangle of the vertices
    pub fn bounds(&self) -> Rect {
        let mut rect = Rect::empty();
        for p in &self.points {
            rect.expand_point(*p);
        }
        rect
    }
}
