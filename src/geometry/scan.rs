//! Horizontal text bands inside a polygon
//!
//! A band is the strip between two scanlines. Its usable width is the
//! overlap of the polygon's extent on both scanlines, so a line of text
//! placed in it stays inside the outline at its top and at its bottom.

use crate::types::Polygon;

/// A horizontal strip of polygon interior that hosts one line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x_start: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub width: f64,
}

impl Band {
    pub fn new(x_start: f64, y_top: f64, y_bottom: f64, width: f64) -> Self {
        Band { x_start, y_top, y_bottom, width }
    }

    pub fn x_end(&self) -> f64 {
        self.x_start + self.width
    }

    pub fn height(&self) -> f64 {
        self.y_bottom - self.y_top
    }

    /// Shrink horizontally by `amount` on both sides, never below zero width
    pub fn inset(&self, amount: f64) -> Band {
        let width = (self.width - 2.0 * amount).max(0.0);
        let x_start = self.x_start + (self.width - width) / 2.0;
        Band { x_start, width, ..*self }
    }
}

/// Leftmost and rightmost crossing of the scanline `y` with the outline.
///
/// Edges are treated as half-open in y so a vertex lying exactly on the
/// scanline is counted once. Horizontal edges never cross.
fn scanline_extent(polygon: &Polygon, y: f64) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;

    for (a, b) in polygon.edges() {
        let crosses = (a.y <= y && b.y > y) || (b.y <= y && a.y > y);
        if !crosses {
            continue;
        }
        let x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
        extent = Some(match extent {
            Some((lo, hi)) => (lo.min(x), hi.max(x)),
            None => (x, x),
        });
    }

    extent
}

/// The band between `y_top` and `y_bottom`, or `None` if either scanline
/// misses the polygon or the two extents do not overlap.
pub fn band_width(polygon: &Polygon, y_top: f64, y_bottom: f64) -> Option<Band> {
    let (y_top, y_bottom) = if y_top <= y_bottom { (y_top, y_bottom) } else { (y_bottom, y_top) };

    let (top_start, top_end) = scanline_extent(polygon, y_top)?;
    let (bottom_start, bottom_end) = scanline_extent(polygon, y_bottom)?;

    let start = top_start.max(bottom_start);
    let end = top_end.min(bottom_end);
    if end < start {
        return None;
    }

    Some(Band::new(start, y_top, y_bottom, end - start))
}

/// Up to `count` stacked bands of `line_height`, the first starting at
/// `y_start`, each shrunk by `inset` on both sides. Bands whose scanlines
/// miss the polygon are left out.
pub fn scan_bands(
    polygon: &Polygon,
    y_start: f64,
    line_height: f64,
    count: usize,
    inset: f64,
) -> Vec<Band> {
    (0..count)
        .filter_map(|k| {
            let y_top = y_start + k as f64 * line_height;
            band_width(polygon, y_top, y_top + line_height)
        })
        .map(|band| band.inset(inset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Polygon {
        Polygon::from_xy(&[(300.0, 100.0), (500.0, 100.0), (500.0, 300.0), (300.0, 300.0)]).unwrap()
    }

    #[test]
    fn rectangle_band_is_full_width() {
        for (top, bottom) in [(101.0, 120.0), (150.0, 162.5), (250.0, 299.0)] {
            let band = band_width(&rect(), top, bottom).unwrap();
            assert!((band.x_start - 300.0).abs() < 1e-9);
            assert!((band.width - 200.0).abs() < 1e-9);
            assert_eq!((band.y_top, band.y_bottom), (top, bottom));
        }
    }

    #[test]
    fn band_outside_polygon_is_none() {
        assert!(band_width(&rect(), 20.0, 40.0).is_none());
        assert!(band_width(&rect(), 290.0, 320.0).is_none());
    }

    #[test]
    fn triangle_band_uses_narrower_scanline() {
        // Apex at the top: width grows linearly with y
        let tri = Polygon::from_xy(&[(100.0, 0.0), (200.0, 200.0), (0.0, 200.0)]).unwrap();
        let band = band_width(&tri, 100.0, 150.0).unwrap();
        assert!((band.x_start - 50.0).abs() < 1e-9, "{band:?}");
        assert!((band.width - 100.0).abs() < 1e-9, "{band:?}");
    }

    #[test]
    fn swapped_scanlines_are_normalized() {
        let band = band_width(&rect(), 200.0, 150.0).unwrap();
        assert_eq!((band.y_top, band.y_bottom), (150.0, 200.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        let band = Band::new(10.0, 0.0, 10.0, 6.0);
        let inset = band.inset(2.0);
        assert_eq!((inset.x_start, inset.width), (12.0, 2.0));
        let gone = band.inset(5.0);
        assert_eq!((gone.x_start, gone.width), (13.0, 0.0));
    }

    #[test]
    fn scan_bands_stack_top_down() {
        let bands = scan_bands(&rect(), 110.0, 20.0, 5, 10.0);
        assert_eq!(bands.len(), 5);
        for (k, band) in bands.iter().enumerate() {
            assert_eq!(band.y_top, 110.0 + 20.0 * k as f64);
            assert!((band.width - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn scan_bands_skip_rows_below_the_polygon() {
        let bands = scan_bands(&rect(), 250.0, 20.0, 5, 0.0);
        assert_eq!(bands.len(), 2);
    }
}
