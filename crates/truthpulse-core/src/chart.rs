//! SVG geometry for the score gauge, the claims line chart and the category pie.
//!
//! Everything here returns plain numbers and path strings; the UI components
//! only place them into `<svg>` elements.
//!
//! Angles are in degrees. Screen coordinates have `y` growing downwards.

use crate::score::TruthScore;
use crate::trends::{CategoryShare, TrendPoint, CATEGORY_COLORS, GAUGE_COLORS};
use std::fmt::Write;

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position (down is positive).
    pub y: f64,
}

impl Point {
    /// Point on a circle; `degrees` is measured clockwise from 12 o'clock.
    pub fn on_circle(cx: f64, cy: f64, radius: f64, degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: cx + radius * radians.sin(),
            y: cy - radius * radians.cos(),
        }
    }
}

/// Outer size and inner margins of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Space reserved for the y-axis labels.
    pub left: f64,
    /// Right margin.
    pub right: f64,
    /// Top margin.
    pub top: f64,
    /// Space reserved for the x-axis labels.
    pub bottom: f64,
}

impl ChartFrame {
    /// Frame used by the Trends line chart card.
    pub const LINE_CARD: ChartFrame = ChartFrame {
        width: 380.0,
        height: 240.0,
        left: 40.0,
        right: 16.0,
        top: 12.0,
        bottom: 30.0,
    };

    /// Width of the plotting area.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    /// Height of the plotting area.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Bottom edge of the plotting area.
    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }
}

/// Round `max` up to an axis maximum that splits evenly into `intervals` steps
/// of 1, 2, 2.5 or 5 times a power of ten. Returns `(axis_max, step)`.
pub fn nice_axis(max: f64, intervals: u32) -> (f64, f64) {
    let intervals = intervals.max(1);
    if !max.is_finite() || max <= 0.0 {
        return (f64::from(intervals), 1.0);
    }

    let raw_step = max / f64::from(intervals);
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|candidate| *candidate >= normalized)
        .unwrap_or(10.0);
    let step = nice * magnitude;

    (step * f64::from(intervals), step)
}

/// One y-axis gridline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    /// Data value at this tick.
    pub value: f64,
    /// Screen position.
    pub y: f64,
}

/// One x-axis label under a data point.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLabel {
    /// Label text.
    pub text: &'static str,
    /// Screen position.
    pub x: f64,
}

/// Screen layout of the claims-over-time line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    /// Frame the layout was computed for.
    pub frame: ChartFrame,
    /// One point per datum, left to right.
    pub points: Vec<Point>,
    /// Gridlines from zero up to the axis maximum.
    pub ticks: Vec<AxisTick>,
    /// X-axis labels.
    pub labels: Vec<DayLabel>,
    /// Top of the y axis.
    pub axis_max: f64,
}

impl LineChartLayout {
    /// Number of intervals on the y axis.
    pub const Y_INTERVALS: u32 = 4;

    /// Lay out `data` inside `frame`.
    pub fn new(frame: ChartFrame, data: &[TrendPoint]) -> Self {
        let peak = data.iter().map(|p| p.claims).max().unwrap_or(0);
        let (axis_max, step) = nice_axis(f64::from(peak), Self::Y_INTERVALS);

        let plot_w = frame.plot_width();
        let plot_h = frame.plot_height();
        let scale_y = |value: f64| frame.top + plot_h * (1.0 - value / axis_max);
        let x_at = |index: usize| {
            if data.len() < 2 {
                frame.left + plot_w / 2.0
            } else {
                frame.left + plot_w * index as f64 / (data.len() - 1) as f64
            }
        };

        let points = data
            .iter()
            .enumerate()
            .map(|(i, p)| Point {
                x: x_at(i),
                y: scale_y(f64::from(p.claims)),
            })
            .collect();

        let labels = data
            .iter()
            .enumerate()
            .map(|(i, p)| DayLabel {
                text: p.day,
                x: x_at(i),
            })
            .collect();

        let ticks = (0..=Self::Y_INTERVALS)
            .map(|i| {
                let value = step * f64::from(i);
                AxisTick {
                    value,
                    y: scale_y(value),
                }
            })
            .collect();

        Self {
            frame,
            points,
            ticks,
            labels,
            axis_max,
        }
    }

    /// `points` attribute for an SVG `<polyline>`.
    pub fn polyline(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
        }
        out
    }
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Category name.
    pub name: &'static str,
    /// Raw value.
    pub value: u32,
    /// Share of the total, 0 to 100.
    pub percent: f64,
    /// Start angle.
    pub start_angle: f64,
    /// End angle.
    pub end_angle: f64,
    /// SVG path `d` attribute.
    pub path: String,
    /// Fill colour.
    pub color: &'static str,
    /// Where to place the value label, just outside the rim.
    pub label_at: Point,
}

/// Distance between the rim and a slice label.
const LABEL_OFFSET: f64 = 16.0;

/// Slice `data` into wedges, clockwise from 12 o'clock.
///
/// Colours cycle through [`CATEGORY_COLORS`]. A zero total yields no slices.
pub fn pie_slices(data: &[CategoryShare], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: u32 = data.iter().map(|c| c.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    data.iter()
        .enumerate()
        .map(|(i, share)| {
            let fraction = f64::from(share.value) / f64::from(total);
            let sweep = 360.0 * fraction;
            let start = angle;
            let end = angle + sweep;
            angle = end;

            PieSlice {
                name: share.name,
                value: share.value,
                percent: fraction * 100.0,
                start_angle: start,
                end_angle: end,
                path: wedge_path(cx, cy, radius, start, end),
                color: CATEGORY_COLORS[i % CATEGORY_COLORS.len()],
                label_at: Point::on_circle(cx, cy, radius + LABEL_OFFSET, start + sweep / 2.0),
            }
        })
        .collect()
}

fn wedge_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= 360.0 {
        // A single arc cannot close on itself, so draw two halves.
        let top = Point::on_circle(cx, cy, radius, 0.0);
        let bottom = Point::on_circle(cx, cy, radius, 180.0);
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            top.x,
            top.y,
            bottom.x,
            bottom.y,
            top.x,
            top.y,
            r = radius
        );
    }

    let from = Point::on_circle(cx, cy, radius, start);
    let to = Point::on_circle(cx, cy, radius, end);
    let large_arc = u8::from(sweep > 180.0);
    format!(
        "M {cx:.2} {cy:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2} Z",
        from.x,
        from.y,
        to.x,
        to.y,
        r = radius
    )
}

/// One band of the half-donut gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeArc {
    /// Share of the half circle, 0 to 100.
    pub value: u8,
    /// SVG path `d` attribute.
    pub path: String,
    /// Fill colour.
    pub color: &'static str,
}

/// Filled and remaining bands of a 180° gauge running left to right over the
/// top, like a speedometer.
pub fn gauge_arcs(score: TruthScore, cx: f64, cy: f64, inner: f64, outer: f64) -> [GaugeArc; 2] {
    let split = -90.0 + 180.0 * f64::from(score.value()) / 100.0;
    [
        GaugeArc {
            value: score.value(),
            path: band_path(cx, cy, inner, outer, -90.0, split),
            color: GAUGE_COLORS[0],
        },
        GaugeArc {
            value: score.remainder(),
            path: band_path(cx, cy, inner, outer, split, 90.0),
            color: GAUGE_COLORS[1],
        },
    ]
}

fn band_path(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let outer_from = Point::on_circle(cx, cy, outer, start);
    let outer_to = Point::on_circle(cx, cy, outer, end);
    let inner_to = Point::on_circle(cx, cy, inner, end);
    let inner_from = Point::on_circle(cx, cy, inner, start);
    format!(
        "M {:.2} {:.2} A {outer:.2} {outer:.2} 0 0 1 {:.2} {:.2} L {:.2} {:.2} A {inner:.2} {inner:.2} 0 0 0 {:.2} {:.2} Z",
        outer_from.x,
        outer_from.y,
        outer_to.x,
        outer_to.y,
        inner_to.x,
        inner_to.y,
        inner_from.x,
        inner_from.y,
    )
}
