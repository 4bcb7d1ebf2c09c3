use std::f64::consts::TAU;

use anyhow::Result;
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::report::chart::Chart;
use crate::stats::{proportions, Count};

/// A bitmap figure owned by a single chart.
pub type Figure<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const FONT: &str = "sans-serif";
const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);
const PIE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Plot ranked categories as vertical bars.
pub fn plot_bar(figure: &Figure, chart: &Chart, data: &[Count]) -> Result<()> {
    let slots = u32::try_from(data.len().max(1))?;
    let y_top = headroom(data.iter().map(|(_, c)| *c).max().unwrap_or(0))?;
    let bars = indexed_counts(data)?;
    let label_of = |value: &SegmentValue<u32>| category_label(data, value);

    let mut plot = ChartBuilder::on(figure)
        .caption(&chart.title, (FONT, 24))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..slots).into_segmented(), 0u32..y_top)?;

    plot.configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len().max(1))
        .x_label_formatter(&label_of)
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    plot.draw_series(
        Histogram::vertical(&plot)
            .style(SERIES_COLOR.filled())
            .margin(8)
            .data(bars),
    )?;

    Ok(())
}

/// Plot ordered categories as a line with a marker on every point.
pub fn plot_line(figure: &Figure, chart: &Chart, data: &[Count]) -> Result<()> {
    let slots = u32::try_from(data.len().max(1))?;
    let y_top = headroom(data.iter().map(|(_, c)| *c).max().unwrap_or(0))?;
    let label_of = |value: &SegmentValue<u32>| category_label(data, value);

    let mut plot = ChartBuilder::on(figure)
        .caption(&chart.title, (FONT, 24))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..slots).into_segmented(), 0u32..y_top)?;

    plot.configure_mesh()
        .x_labels(data.len().max(1))
        .x_label_formatter(&label_of)
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    let points: Vec<(SegmentValue<u32>, u32)> = indexed_counts(data)?
        .into_iter()
        .map(|(i, count)| (SegmentValue::CenterOf(i), count))
        .collect();

    plot.draw_series(LineSeries::new(points.clone(), SERIES_COLOR.stroke_width(2)))?;
    plot.draw_series(
        points
            .into_iter()
            .map(|point| Circle::new(point, 4, SERIES_COLOR.filled())),
    )?;

    Ok(())
}

/// Plot free points.
pub fn plot_scatter(figure: &Figure, chart: &Chart, points: &[(f64, f64)]) -> Result<()> {
    let (x_min, x_max) = padded_bounds(points.iter().map(|p| p.0));
    let (_, y_max) = padded_bounds(points.iter().map(|p| p.1));

    let mut plot = ChartBuilder::on(figure)
        .caption(&chart.title, (FONT, 24))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max.max(1.0))?;

    plot.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    plot.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, SERIES_COLOR.filled())),
    )?;

    Ok(())
}

/// Plot category shares as pie wedges labelled with their percentage
/// (one decimal). Wedges start at three o'clock and run counter-clockwise.
pub fn plot_pie(figure: &Figure, chart: &Chart, data: &[Count]) -> Result<()> {
    let area = figure.titled(&chart.title, (FONT, 24))?;
    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let centered =
        |size: f64| TextStyle::from((FONT, size).into_font()).pos(Pos::new(HPos::Center, VPos::Center));

    let mut start = 0.0;
    for (i, (label, share)) in proportions(data).iter().enumerate() {
        let sweep = share * TAU;
        let steps = ((share * 180.0).ceil() as usize).max(2);

        let mut outline = Vec::with_capacity(steps + 2);
        outline.push(center);
        for step in 0..=steps {
            let angle = start + sweep * step as f64 / steps as f64;
            outline.push(point_at(center, radius, angle));
        }
        area.draw(&Polygon::new(
            outline,
            PIE_COLORS[i % PIE_COLORS.len()].filled(),
        ))?;

        let middle = start + sweep / 2.0;
        area.draw(&Text::new(
            format!("{:.1}%", share * 100.0),
            point_at(center, radius * 0.6, middle),
            centered(14.0),
        ))?;
        area.draw(&Text::new(
            label.clone(),
            point_at(center, radius * 1.15, middle),
            centered(16.0),
        ))?;

        start += sweep;
    }

    Ok(())
}

fn category_label(data: &[Count], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => data
            .get(*i as usize)
            .map(|(label, _)| label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Whether the sans-serif font used for captions and labels can be loaded.
pub fn font_available() -> bool {
    FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
        .box_size("Ag")
        .is_ok()
}

fn indexed_counts(data: &[Count]) -> Result<Vec<(u32, u32)>> {
    data.iter()
        .enumerate()
        .map(|(i, (_, count))| Ok((u32::try_from(i)?, u32::try_from(*count)?)))
        .collect()
}

fn headroom(max: usize) -> Result<u32> {
    let max = u32::try_from(max)?;
    Ok(max.saturating_add((max / 10).max(1)))
}

fn padded_bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

fn point_at(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.cos()).round() as i32,
        center.1 - (radius * angle.sin()).round() as i32,
    )
}
