//! Lay out a sample page and print what a rasterizer would draw.
//!
//! Run with: cargo run --example layout --features tracing

use balloon::layout::{XLocation, YLocation};
use balloon::{Color, MonospaceMetrics, Page, Placement, Polygon, Shape, Side, Style, TextItem};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let pointer = Polygon::from_xy(&[
        (100.0, 300.0),
        (200.0, 250.0),
        (300.0, 100.0),
        (500.0, 100.0),
        (500.0, 300.0),
        (300.0, 300.0),
    ])?;

    let items = vec![
        TextItem::new(0, "This corner of the diagram is where the interesting part happens")
            .at(Placement::Callout(pointer))
            .with_keywords(["interesting"])
            .colored(Color::BLACK, Some(Color::WHITE)),
        TextItem::new(1, "Overview").styled(Style::H1).at(Placement::Side {
            side: Side::West,
            x: XLocation::Left,
            y: YLocation::Top,
        }),
        TextItem::new(2, "Figure 1: a callout, a heading and this footer")
            .colored(Color::WHITE, Some(Color::Rgba(0, 0, 0, 160))),
    ];

    let layout = Page::new(640.0, 480.0).layout(&items, &MonospaceMetrics::default())?;

    for shape in &layout.shapes {
        match shape {
            Shape::Outline { points, .. } => println!("outline: {} points", points.len()),
            Shape::Rect { rect, fill } => println!("rect: {rect:?} filled {fill}"),
        }
    }
    for run in &layout.texts {
        println!("{:>7.1} {:>7.1}  {}  {:?}", run.origin.x, run.origin.y, run.font, run.text);
    }
    for (keyword, boxes) in &layout.highlights {
        println!("highlight {keyword:?}: {} box(es)", boxes.len());
    }
    Ok(())
}
