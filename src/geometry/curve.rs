//! Curve sampling, line rasterization and the sharp-corner policy

use std::ops::Range;

use crate::errors::{Error, Result};
use crate::log::debug;
use crate::types::{Angle, Point, Polygon};

use super::control::control_points;
use super::corner_angle;

/// Points sampled along each smoothed edge, endpoints included
pub const CURVE_SAMPLES: usize = 10;

/// Sample `n` points along a cubic bezier, `start` and `end` included.
///
/// The Bernstein weights are renormalized by their sum so the endpoints
/// come back bit-for-bit; they are also pushed directly rather than
/// evaluated.
pub fn cubic_bezier(
    start: Point,
    end: Point,
    ctrl1: Point,
    ctrl2: Point,
    n: usize,
) -> Result<Vec<Point>> {
    if n < 2 {
        return Err(Error::InvalidSampleCount { count: n });
    }

    let mut points = Vec::with_capacity(n);
    points.push(start);

    let steps = (n - 1) as f64;
    for i in 1..n - 1 {
        let t = i as f64 / steps;
        let tc = 1.0 - t;

        let w0 = tc * tc * tc;
        let w1 = 3.0 * tc * tc * t;
        let w2 = 3.0 * tc * t * t;
        let w3 = t * t * t;
        let sum = w0 + w1 + w2 + w3;

        points.push((start * w0 + ctrl1 * w1 + ctrl2 * w2 + end * w3) / sum);
    }

    points.push(end);
    Ok(points)
}

/// Rasterize the segment `p0 -> p1` on the integer grid (Bresenham).
///
/// Endpoints are rounded to the nearest pixel. Every step of the major
/// axis yields one point, both ends included, returned in `p0 -> p1`
/// order. The set of points does not depend on the direction.
pub fn line(p0: Point, p1: Point) -> Vec<Point> {
    let (mut x0, mut y0) = (p0.x.round(), p0.y.round());
    let (mut x1, mut y1) = (p1.x.round(), p1.y.round());

    let steep = (x0 - x1).abs() < (y0 - y1).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }

    let reversed = x0 > x1;
    if reversed {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let slope = if dx == 0.0 { 0.0 } else { (dy / dx).abs() };
    let y_step = if y1 > y0 { 1.0 } else { -1.0 };

    let steps = dx as usize;
    let mut points = Vec::with_capacity(steps + 1);
    let mut error = 0.0;
    let mut y = y0;

    for step in 0..=steps {
        let x = x0 + step as f64;
        points.push(if steep { Point::new(y, x) } else { Point::new(x, y) });

        error += slope;
        if error > 0.5 {
            y += y_step;
            error -= 1.0;
        }
    }

    if reversed {
        points.reverse();
    }
    points
}

/// How one polygon edge was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Rasterized straight segment, next to a sharp corner
    Line,
    /// Bezier sampled with [`CURVE_SAMPLES`] points
    Curve,
}

/// One polygon edge within a [`SmoothedOutline`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEdge {
    pub kind: EdgeKind,
    /// Where this edge's points sit in [`SmoothedOutline::points`]
    pub points: Range<usize>,
}

/// A rendering-ready callout outline
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedOutline {
    points: Vec<Point>,
    edges: Vec<OutlineEdge>,
}

impl SmoothedOutline {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// One entry per polygon edge, in vertex order
    pub fn edges(&self) -> &[OutlineEdge] {
        &self.edges
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of edges drawn as the given kind
    pub fn count(&self, kind: EdgeKind) -> usize {
        self.edges.iter().filter(|e| e.kind == kind).count()
    }

    /// Whether the outline ends where it starts
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

/// Turn a polygon into a rounded callout outline.
///
/// Edge `(i, i+1)` becomes a straight rasterized line when the corner at
/// either end is at most `min_angle`; a curve there would overshoot the
/// pointer tip. Every other edge becomes a bezier through the control
/// points of its two vertices.
pub fn smooth_points(polygon: &Polygon, alpha: f64, min_angle: Angle) -> Result<SmoothedOutline> {
    if !min_angle.radians().is_finite() {
        return Err(Error::InvalidThreshold { degrees: min_angle.degrees() });
    }

    let controls = control_points(polygon, alpha)?;
    let n = polygon.len();
    let angles: Vec<Angle> = (0..n).map(|i| corner_angle(polygon, i)).collect();

    let mut points = Vec::with_capacity(n * CURVE_SAMPLES);
    let mut edges = Vec::with_capacity(n);

    for i in 0..n {
        let next = (i + 1) % n;
        let start = polygon.points()[i];
        let end = polygon.points()[next];

        let (kind, segment) = if angles[i] <= min_angle || angles[next] <= min_angle {
            (EdgeKind::Line, line(start, end))
        } else {
            let (ctrl1, ctrl2) = (controls[i].outgoing, controls[next].incoming);
            let curve = cubic_bezier(start, end, ctrl1, ctrl2, CURVE_SAMPLES)?;
            (EdgeKind::Curve, curve)
        };

        let from = points.len();
        points.extend(segment);
        edges.push(OutlineEdge { kind, points: from..points.len() });
    }

    debug!(
        vertices = n,
        points = points.len(),
        lines = edges.iter().filter(|e| e.kind == EdgeKind::Line).count(),
        "smoothed callout outline"
    );

    Ok(SmoothedOutline { points, edges })
}
