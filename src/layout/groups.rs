//! Layout groups: callouts, side columns and the footer
//!
//! Each group lays itself out into a fresh [`RenderContext`] and never looks
//! at another group.

use enum_dispatch::enum_dispatch;

use crate::errors::{Error, Result};
use crate::geometry::{excise_pointer, scan_bands, smooth_points};
use crate::log::debug;
use crate::text::{Align, Font, TextMetrics, WrapResult, extract_keyword_boxes, wrap, wrap_box};
use crate::types::{Polygon, Rect, pt};

use super::context::RenderContext;
use super::defaults;
use super::style::LayoutConfig;
use super::types::{Shape, Side, TextItem, XLocation, YLocation};

/// Page-wide inputs shared by every group
#[derive(Clone, Copy)]
pub struct LayoutEnv<'a> {
    pub width: f64,
    pub height: f64,
    pub config: &'a LayoutConfig,
    pub metrics: &'a dyn TextMetrics,
}

#[enum_dispatch]
pub trait LayoutGroup {
    /// Lay the group out on the page
    fn layout(&self, env: &LayoutEnv<'_>) -> Result<RenderContext>;
}

/// A set of items laid out together
#[enum_dispatch(LayoutGroup)]
#[derive(Debug, Clone, PartialEq)]
pub enum TextGroup {
    CalloutGroup,
    SideGroup,
    FooterGroup,
}

/// Place wrapped lines and collect their keyword highlights
fn emit(
    ctx: &mut RenderContext,
    item: &TextItem,
    wrapped: &WrapResult,
    align: Align,
    font: &Font,
    env: &LayoutEnv<'_>,
) {
    let lines = wrapped.place(align);
    ctx.add_lines(&lines, font, &item.fg);
    ctx.add_highlights(extract_keyword_boxes(&lines, &item.keywords, env.metrics, font));
}

/// One item inside a speech-balloon outline
#[derive(Debug, Clone, PartialEq)]
pub struct CalloutGroup {
    pub polygon: Polygon,
    pub item: TextItem,
}

impl CalloutGroup {
    pub fn new(polygon: Polygon, item: TextItem) -> Self {
        CalloutGroup { polygon, item }
    }

    /// Wrap the text into `body` at one font size.
    ///
    /// Bands start half a line below the top of the body and are inset by
    /// half a line on both sides. Once the text fits, the block is moved to
    /// sit around the body's centroid if it still fits there.
    fn fit(
        &self,
        body: &Polygon,
        font: &Font,
        line_height: f64,
        env: &LayoutEnv<'_>,
    ) -> Result<WrapResult> {
        let no_room = || Error::OutOfBounds {
            placed: 0,
            remaining: self.item.value.split_whitespace().count(),
        };
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(no_room());
        }

        let bounds = body.bounds();
        let half = line_height / 2.0;
        let rows = ((bounds.height() - line_height) / line_height).floor();
        if !rows.is_finite() {
            return Err(no_room());
        }
        let rows = rows.max(0.0) as usize;

        let bands = scan_bands(body, bounds.top + half, line_height, rows, half);
        let first = wrap(&self.item.value, bands, env.metrics, font)?;
        if first.is_empty() {
            return Ok(first);
        }

        let block = first.len() as f64 * line_height;
        let lowest = (bounds.bottom - half - block).max(bounds.top + half);
        let y_start = (body.centroid().y - block / 2.0).clamp(bounds.top + half, lowest);
        let centered = scan_bands(body, y_start, line_height, first.len(), half);
        Ok(wrap(&self.item.value, centered, env.metrics, font).unwrap_or(first))
    }
}

impl LayoutGroup for CalloutGroup {
    fn layout(&self, env: &LayoutEnv<'_>) -> Result<RenderContext> {
        let config = env.config;
        let item = &self.item;
        let mut ctx = RenderContext::new();

        let outline = smooth_points(&self.polygon, config.smooth_factor, config.pointer_angle)?;
        ctx.add_shape(Shape::Outline {
            points: outline.into_points(),
            fill: item.bg.clone(),
            stroke: item.outline.clone(),
        });

        let body = excise_pointer(&self.polygon, config.pointer_angle);
        let style = config.styles.get(item.style);
        // A zero-size font is never attempted.
        let floor = config.min_font_size.max(1);
        let mut size = style.font_size.max(1);

        let (font, wrapped) = loop {
            let font = style.font().with_size(size);
            match self.fit(&body, &font, style.line_height_at(size), env) {
                Ok(wrapped) => break (font, wrapped),
                Err(err) if err.is_retryable() && size > floor => {
                    debug!(size, "callout text does not fit, shrinking font");
                    size -= 1;
                }
                Err(err) if err.is_retryable() => {
                    return Err(Error::FontSizeExhausted { min_size: floor });
                }
                Err(err) => return Err(err),
            }
        };

        emit(&mut ctx, item, &wrapped, Align::Center, &font, env);
        Ok(ctx)
    }
}

/// Items sharing one side, column and vertical anchor
#[derive(Debug, Clone, PartialEq)]
pub struct SideGroup {
    pub side: Side,
    pub x: XLocation,
    pub y: YLocation,
    pub items: Vec<TextItem>,
}

impl SideGroup {
    pub fn new(side: Side, x: XLocation, y: YLocation, items: Vec<TextItem>) -> Self {
        SideGroup { side, x, y, items }
    }

    /// Anchor x and line alignment for this column
    fn anchor(&self, page_width: f64) -> (f64, Align) {
        let anchors = match self.side {
            Side::West => defaults::WEST_ANCHORS,
            Side::East => defaults::EAST_ANCHORS,
        };
        match self.x {
            XLocation::Left => (anchors[0] * page_width, Align::Left),
            XLocation::Center => (anchors[1] * page_width, Align::Center),
            XLocation::Right => (anchors[2] * page_width, Align::Right),
        }
    }
}

impl LayoutGroup for SideGroup {
    fn layout(&self, env: &LayoutEnv<'_>) -> Result<RenderContext> {
        let mut ctx = RenderContext::new();
        if self.items.is_empty() {
            return Ok(ctx);
        }

        let box_width = defaults::SIDE_BOX_RATIO * env.width;
        let (anchor, align) = self.anchor(env.width);
        let x_start = match align {
            Align::Left => anchor,
            Align::Center => anchor - box_width / 2.0,
            Align::Right => anchor - box_width,
        };

        // The vertical anchor depends on the height of the whole group.
        let wrapped = self
            .items
            .iter()
            .map(|item| {
                let style = env.config.styles.get(item.style);
                let font = style.font();
                let origin = pt(x_start, 0.0);
                let line_height = style.line_height as f64;
                let lines =
                    wrap_box(&item.value, origin, box_width, line_height, env.metrics, &font)?;
                Ok((font, style.leading() as f64, lines))
            })
            .collect::<Result<Vec<_>>>()?;

        let total: f64 = wrapped.iter().map(|(_, _, lines)| lines.size.h).sum();
        let y_top = match self.y {
            YLocation::Top => defaults::TOP_RATIO * env.height,
            YLocation::Center => env.height / 2.0 - total / 2.0,
            YLocation::Bottom => defaults::BOTTOM_RATIO * env.height - total,
        };

        let mut y = y_top;
        for (item, (font, gap, lines)) in self.items.iter().zip(wrapped) {
            let h = lines.size.h;
            emit(&mut ctx, item, &lines.translated(pt(0.0, y)), align, &font, env);
            y += h + gap;
        }

        if let Some(fill) = self.items[0].bg.clone() {
            if !ctx.bounds.is_empty() {
                let rect = Rect::new(ctx.bounds.left, y_top, ctx.bounds.right, y);
                ctx.add_shape(Shape::Rect { rect, fill });
            }
        }

        debug!(side = ?self.side, items = self.items.len(), y_top, "side group placed");
        Ok(ctx)
    }
}

/// Items stacked along the bottom of the page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FooterGroup {
    pub items: Vec<TextItem>,
}

impl FooterGroup {
    pub fn new(items: Vec<TextItem>) -> Self {
        FooterGroup { items }
    }
}

impl LayoutGroup for FooterGroup {
    fn layout(&self, env: &LayoutEnv<'_>) -> Result<RenderContext> {
        let mut ctx = RenderContext::new();
        if self.items.is_empty() {
            return Ok(ctx);
        }

        // Each item is followed by one glyph height of space.
        let wrapped = self
            .items
            .iter()
            .map(|item| {
                let style = env.config.styles.get(item.style);
                let font = style.font();
                let glyph = env.metrics.glyph(&font);
                let margin = defaults::FOOTER_MARGIN_GLYPHS * glyph.w;
                let box_width = (env.width - 2.0 * margin).max(0.0);
                let origin = pt(margin, 0.0);
                let line_height = style.line_height as f64;
                let lines =
                    wrap_box(&item.value, origin, box_width, line_height, env.metrics, &font)?;
                let step = lines.size.h + glyph.h;
                Ok((font, step, lines))
            })
            .collect::<Result<Vec<_>>>()?;

        let y_min = env.height - wrapped.iter().map(|(_, step, _)| step).sum::<f64>();
        let mut y = y_min;
        for (item, (font, step, lines)) in self.items.iter().zip(wrapped) {
            emit(&mut ctx, item, &lines.translated(pt(0.0, y)), Align::Left, &font, env);
            y += step;
        }

        if let Some(fill) = self.items[0].bg.clone() {
            let rect = Rect::new(0.0, y_min, env.width, env.height);
            ctx.add_shape(Shape::Rect { rect, fill });
        }

        debug!(items = self.items.len(), y_min, "footer placed");
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::{Style, StyleInfo};
    use crate::layout::types::{Color, Placement};
    use crate::text::MonospaceMetrics;

    const W: f64 = 400.0;
    const H: f64 = 300.0;

    fn env<'a>(config: &'a LayoutConfig, metrics: &'a MonospaceMetrics) -> LayoutEnv<'a> {
        LayoutEnv {
            width: W,
            height: H,
            config,
            metrics,
        }
    }

    fn callout_polygon() -> Polygon {
        Polygon::from_xy(&[
            (100.0, 300.0),
            (200.0, 250.0),
            (300.0, 100.0),
            (500.0, 100.0),
            (500.0, 300.0),
            (300.0, 300.0),
        ])
        .unwrap()
    }

    fn origins(ctx: &RenderContext) -> Vec<(f64, f64)> {
        ctx.texts.iter().map(|t| (t.origin.x, t.origin.y)).collect()
    }

    #[test]
    fn footer_sits_on_the_bottom_edge() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let item = TextItem::new(0, "hello world").colored(Color::BLACK, Some(Color::WHITE));
        let ctx = FooterGroup::new(vec![item]).layout(&env(&config, &metrics)).unwrap();

        // glyph is 5x10, so a 10px margin and a 12 + 10 step
        assert_eq!(origins(&ctx), vec![(10.0, 278.0)]);
        assert_eq!(
            ctx.shapes,
            vec![Shape::Rect {
                rect: Rect::new(0.0, 278.0, W, H),
                fill: Color::WHITE
            }]
        );
    }

    #[test]
    fn footer_stacks_in_order() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let items = vec![TextItem::new(0, "first"), TextItem::new(1, "second")];
        let ctx = FooterGroup::new(items).layout(&env(&config, &metrics)).unwrap();
        assert_eq!(origins(&ctx), vec![(10.0, 256.0), (10.0, 278.0)]);
        assert!(ctx.shapes.is_empty());
    }

    #[test]
    fn side_columns_follow_their_anchor() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let env = env(&config, &metrics);

        let hello = vec![TextItem::new(0, "hello")];
        let west = SideGroup::new(Side::West, XLocation::Left, YLocation::Top, hello.clone());
        assert_eq!(origins(&west.layout(&env).unwrap()), vec![(20.0, 15.0)]);

        // box spans 260..380, right-aligned 25px line
        let east = SideGroup::new(Side::East, XLocation::Right, YLocation::Center, hello);
        assert_eq!(origins(&east.layout(&env).unwrap()), vec![(355.0, 144.0)]);
    }

    #[test]
    fn bottom_side_group_ends_above_the_margin() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let items = vec![
            TextItem::new(0, "one").colored(Color::BLACK, Some(Color::Named("navy".into()))),
            TextItem::new(1, "two"),
        ];
        let group = SideGroup::new(Side::West, XLocation::Left, YLocation::Bottom, items);
        let ctx = group.layout(&env(&config, &metrics)).unwrap();

        // 285 - 24 = 261, then one line and the 2px leading
        assert_eq!(origins(&ctx), vec![(20.0, 261.0), (20.0, 275.0)]);
        assert_eq!(
            ctx.shapes,
            vec![Shape::Rect {
                rect: Rect::new(20.0, 261.0, 35.0, 289.0),
                fill: Color::Named("navy".into())
            }]
        );
    }

    #[test]
    fn callout_text_is_centered_in_the_body() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let item = TextItem::new(0, "Hello").at(Placement::Callout(callout_polygon()));
        let ctx = CalloutGroup::new(callout_polygon(), item)
            .layout(&env(&config, &metrics))
            .unwrap();

        assert!(matches!(ctx.shapes[0], Shape::Outline { .. }));
        assert_eq!(ctx.texts.len(), 1);
        let run = &ctx.texts[0];
        assert_eq!(run.font.size, 10);
        // body centroid is at y = 210
        assert_eq!(run.origin.y, 204.0);
        assert!(run.origin.x > 200.0 && run.origin.x + 25.0 < 500.0);
    }

    #[test]
    fn callout_shrinks_until_text_fits() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let rect =
            Polygon::from_xy(&[(0.0, 0.0), (100.0, 0.0), (100.0, 40.0), (0.0, 40.0)]).unwrap();
        let item = TextItem::new(0, "aaaa bbbb cccc dddd eeee ffff gggg hhhh");
        let ctx = CalloutGroup::new(rect, item).layout(&env(&config, &metrics)).unwrap();

        let texts: Vec<_> = ctx.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["aaaa bbbb cccc dddd", "eeee ffff gggg hhhh"]);
        assert!(ctx.texts.iter().all(|t| t.font.size == 9));
        assert_eq!(ctx.texts[0].origin.y, 9.0);
    }

    #[test]
    fn callout_gives_up_at_the_minimum_size() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let tiny = Polygon::from_xy(&[(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]).unwrap();
        let err = CalloutGroup::new(tiny, TextItem::new(0, "hello"))
            .layout(&env(&config, &metrics))
            .unwrap_err();
        assert_eq!(err, Error::FontSizeExhausted { min_size: 6 });
    }

    #[test]
    fn zero_minimum_still_stops_at_one_pixel() {
        let config = LayoutConfig {
            min_font_size: 0,
            ..LayoutConfig::default()
        };
        let metrics = MonospaceMetrics::default();
        let tiny = Polygon::from_xy(&[(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]).unwrap();
        let text = "overflowing words ".repeat(30);
        let err = CalloutGroup::new(tiny, TextItem::new(0, text))
            .layout(&env(&config, &metrics))
            .unwrap_err();
        assert_eq!(err, Error::FontSizeExhausted { min_size: 1 });
    }

    #[test]
    fn style_without_leading_on_a_sliver_fails_cleanly() {
        let config = LayoutConfig {
            min_font_size: 0,
            ..LayoutConfig::default()
        }
        .with_style(Style::Normal, StyleInfo::new(10, 10));
        let metrics = MonospaceMetrics::default();
        let sliver = Polygon::from_xy(&[(0.0, 0.0), (20.0, 0.0), (20.0, 0.5), (0.0, 0.5)]).unwrap();
        let err = CalloutGroup::new(sliver, TextItem::new(0, "hello"))
            .layout(&env(&config, &metrics))
            .unwrap_err();
        assert_eq!(err, Error::FontSizeExhausted { min_size: 1 });
    }

    #[test]
    fn fit_rejects_a_zero_line_height() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let group = CalloutGroup::new(callout_polygon(), TextItem::new(0, "two words"));
        let font = Font::new("sans", 10);
        for line_height in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = group
                .fit(&callout_polygon(), &font, line_height, &env(&config, &metrics))
                .unwrap_err();
            assert_eq!(err, Error::OutOfBounds { placed: 0, remaining: 2 });
        }
    }

    #[test]
    fn callout_highlights_keywords() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let item = TextItem::new(0, "a red fox").with_keywords(["fox"]);
        let ctx = CalloutGroup::new(callout_polygon(), item)
            .layout(&env(&config, &metrics))
            .unwrap();
        assert_eq!(ctx.highlights.get("fox").len(), 1);
    }

    #[test]
    fn groups_dispatch_through_the_enum() {
        let config = LayoutConfig::default();
        let metrics = MonospaceMetrics::default();
        let group: TextGroup = FooterGroup::new(vec![TextItem::new(0, "x")]).into();
        assert_eq!(group.layout(&env(&config, &metrics)).unwrap().texts.len(), 1);
    }
}
