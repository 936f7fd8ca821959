//! Callout outline geometry
//!
//! This module is organized into submodules:
//! - `control`: bezier control points derived from neighbouring edges
//! - `curve`: bezier sampling, line rasterization and the corner policy
//! - `scan`: horizontal text bands inside a polygon
//!
//! The functions here are the shared core: distances, the law-of-cosines
//! corner angle, and sharp-corner (pointer) detection.

pub mod control;
pub mod curve;
pub mod scan;

pub use control::{ControlPointPair, control_points};
pub use curve::{
    CURVE_SAMPLES, EdgeKind, OutlineEdge, SmoothedOutline, cubic_bezier, line, smooth_points,
};
pub use scan::{Band, band_width, scan_bands};

use crate::errors::{Error, Result};
use crate::log::{debug, warn};
use crate::types::{Angle, Point, Polygon};

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Angle at `p1` between the rays towards `p2` and `p3`, or `None` when
/// either ray has zero length.
fn law_of_cosines(p1: Point, p2: Point, p3: Point) -> Option<Angle> {
    let d12 = distance(p1, p2);
    let d13 = distance(p1, p3);
    if d12 == 0.0 || d13 == 0.0 {
        return None;
    }
    let d23 = distance(p2, p3);
    // Rounding can push collinear rays a hair past ±1.
    let cos = ((d12 * d12 + d13 * d13 - d23 * d23) / (2.0 * d12 * d13)).clamp(-1.0, 1.0);
    Some(Angle::from_radians(cos.acos()))
}

/// Angle at `p1` between the rays towards `p2` and `p3`.
///
/// A zero-length ray has no direction; the angle is then a right angle by
/// convention, so a duplicated point never reads as a sharp corner.
pub fn angle(p1: Point, p2: Point, p3: Point) -> Angle {
    law_of_cosines(p1, p2, p3).unwrap_or(Angle::RIGHT)
}

/// Interior angle at vertex `i`, failing on a zero-length adjacent edge
pub fn try_corner_angle(polygon: &Polygon, i: usize) -> Result<Angle> {
    let i = i as isize;
    law_of_cosines(polygon.vertex(i), polygon.vertex(i - 1), polygon.vertex(i + 1))
        .ok_or(Error::DegenerateGeometry { vertex: i.rem_euclid(polygon.len() as isize) as usize })
}

/// Interior angle at vertex `i`, applying the right-angle convention to
/// degenerate corners
pub fn corner_angle(polygon: &Polygon, i: usize) -> Angle {
    try_corner_angle(polygon, i).unwrap_or_else(|_| {
        warn!(vertex = i, "degenerate corner, assuming 90 degrees");
        Angle::RIGHT
    })
}

/// Indices of the vertices whose interior angle is at most `threshold`
pub fn sharp_corners(polygon: &Polygon, threshold: Angle) -> Vec<usize> {
    (0..polygon.len())
        .filter(|&i| corner_angle(polygon, i) <= threshold)
        .collect()
}

/// The callout pointer: the sharpest vertex at or under `threshold`.
///
/// Ties go to the lowest index, so the choice does not depend on where the
/// point list happens to start scanning.
pub fn pointer_index(polygon: &Polygon, threshold: Angle) -> Option<usize> {
    let mut best: Option<(usize, Angle)> = None;
    for i in 0..polygon.len() {
        let a = corner_angle(polygon, i);
        if a > threshold {
            continue;
        }
        match best {
            Some((_, b)) if b <= a => {}
            _ => best = Some((i, a)),
        }
    }
    best.map(|(i, _)| i)
}

/// The polygon without its pointer vertex.
///
/// Returns the input unchanged when there is no pointer, or when removing
/// it would leave fewer than three points.
pub fn excise_pointer(polygon: &Polygon, threshold: Angle) -> Polygon {
    let Some(index) = pointer_index(polygon, threshold) else {
        return polygon.clone();
    };
    match polygon.without_vertex(index) {
        Some(body) => {
            debug!(index, "excised callout pointer");
            body
        }
        None => polygon.clone(),
    }
}
