//! Bezier control points for smoothing a closed polygon
//!
//! Each vertex gets a pair of control points lying on a line parallel to
//! the segment joining its two edge midpoints. The pair is pulled towards
//! the vertex by `alpha`: small values hug the midpoints (flat curves), large
//! values hug the vertex (tight corners).

use crate::errors::{Error, Result};
use crate::types::{Point, Polygon};

use super::distance;

/// Control points around one polygon vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointPair {
    /// Shapes the curve on the edge arriving at the vertex
    pub incoming: Point,
    /// Shapes the curve on the edge leaving the vertex
    pub outgoing: Point,
}

/// Compute one [`ControlPointPair`] per vertex.
///
/// The curve for edge `(i, i+1)` uses `pairs[i].outgoing` and
/// `pairs[i+1].incoming`.
pub fn control_points(polygon: &Polygon, alpha: f64) -> Result<Vec<ControlPointPair>> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::InvalidAlpha { alpha });
    }

    let n = polygon.len() as isize;
    let mut pairs = Vec::with_capacity(polygon.len());

    for i in 0..n {
        let prev = polygon.vertex(i - 1);
        let cur = polygon.vertex(i);
        let next = polygon.vertex(i + 1);

        let mid_in = (prev + cur) * 0.5;
        let mid_out = (cur + next) * 0.5;

        let len_in = distance(prev, cur);
        let len_out = distance(cur, next);
        // Both edges empty means three coincident points; split evenly.
        let p = if len_in + len_out == 0.0 {
            0.5
        } else {
            len_in / (len_in + len_out)
        };

        let anchor = mid_in + (mid_out - mid_in) * p;
        let delta = anchor - cur;

        // Shift both midpoints so their anchor lands on the vertex, then
        // pull each towards the vertex.
        pairs.push(ControlPointPair {
            incoming: (mid_in - delta).lerp(cur, alpha),
            outgoing: (mid_out - delta).lerp(cur, alpha),
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    fn square() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
    }

    #[test]
    fn rejects_alpha_outside_open_interval() {
        for alpha in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let err = control_points(&square(), alpha).unwrap_err();
            assert!(matches!(err, Error::InvalidAlpha { .. }), "{alpha}");
        }
    }

    #[test]
    fn one_pair_per_vertex() {
        let pairs = control_points(&square(), 0.5).unwrap();
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn square_corner_control_points() {
        // At (10, 0): midpoints (5, 0) and (10, 5), equal edges so the
        // anchor is their midpoint (7.5, 2.5); delta is (-2.5, 2.5).
        let pairs = control_points(&square(), 0.5).unwrap();
        assert_eq!(pairs[1].incoming, pt(8.75, -1.25));
        assert_eq!(pairs[1].outgoing, pt(11.25, 1.25));
    }

    #[test]
    fn controls_are_symmetric_about_the_vertex_for_equal_edges() {
        let pairs = control_points(&square(), 0.3).unwrap();
        for (i, pair) in pairs.iter().enumerate() {
            let v = square().points()[i];
            let mid = (pair.incoming + pair.outgoing) * 0.5;
            assert!(mid.distance(v) < 1e-9, "vertex {i}: {mid:?} vs {v:?}");
        }
    }

    #[test]
    fn coincident_points_stay_finite() {
        let poly = Polygon::from_xy(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]).unwrap();
        let pairs = control_points(&poly, 0.5).unwrap();
        assert!(pairs.iter().all(|p| p.incoming.is_finite() && p.outgoing.is_finite()));
    }
}
