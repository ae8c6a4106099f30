//! SVG rendering of [`ChartSpec`] for inline display.

use std::fmt::Write;

use crate::domain::chart::{ChartSpec, LineStyle, SeriesSpec};

const WIDTH: f64 = 800.0;
const UNIT_HEIGHT: f64 = 80.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 24.0;
const Y_TICKS: usize = 5;
const X_TICKS: usize = 6;

struct Frame {
    height: f64,
    min: f64,
    max: f64,
    count: usize,
}

impl Frame {
    fn plot_width(&self) -> f64 {
        WIDTH - PAD_LEFT - PAD_RIGHT
    }

    fn plot_height(&self) -> f64 {
        self.height - PAD_TOP - PAD_BOTTOM
    }

    fn x(&self, index: usize) -> f64 {
        if self.count > 1 {
            PAD_LEFT + index as f64 * self.plot_width() / (self.count - 1) as f64
        } else {
            PAD_LEFT + self.plot_width() / 2.0
        }
    }

    fn y(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        self.height - PAD_BOTTOM - (clamped - self.min) / (self.max - self.min) * self.plot_height()
    }
}

pub fn render_svg(chart: &ChartSpec) -> String {
    let height = UNIT_HEIGHT * chart.height_units as f64;
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w:.0} {h:.0}" width="100%" role="img" aria-label="{title}">"#,
        w = WIDTH,
        h = height,
        title = escape(chart.title),
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{:.0}" height="{:.0}" fill="white"/>"#,
        WIDTH, height
    );

    let count = chart.point_count();
    let Some((lo, hi)) = chart.value_range().filter(|_| count > 0) else {
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" class="empty">No data to plot.</text></svg>"#,
            WIDTH / 2.0,
            height / 2.0
        );
        return svg;
    };

    let (min, max) = if chart.y_bounds.is_some() {
        (lo, hi)
    } else {
        pad_range(lo, hi)
    };
    let frame = Frame {
        height,
        min,
        max,
        count,
    };

    write_grid(&mut svg, &frame, chart);

    for line in &chart.reference_lines {
        let y = frame.y(line.value);
        let dash = match line.style {
            LineStyle::Dashed => r#" stroke-dasharray="6 4""#,
            LineStyle::Solid => "",
        };
        let _ = write!(
            svg,
            r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#555" stroke-width="1"{dash}/>"##,
            PAD_LEFT,
            WIDTH - PAD_RIGHT,
        );
    }

    for series in &chart.series {
        write_series(&mut svg, &frame, series);
    }

    if chart.show_legend {
        write_legend(&mut svg, &chart.series);
    }

    svg.push_str("</svg>");
    svg
}

fn pad_range(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    } else {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        (lo - pad, hi + pad)
    }
}

fn write_grid(svg: &mut String, frame: &Frame, chart: &ChartSpec) {
    let span = frame.max - frame.min;
    for i in 0..=Y_TICKS {
        let value = frame.min + span * i as f64 / Y_TICKS as f64;
        let y = frame.y(value);
        let _ = write!(
            svg,
            r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e5e5e5" stroke-width="1"/>"##,
            PAD_LEFT,
            WIDTH - PAD_RIGHT,
        );
        let _ = write!(
            svg,
            r##"<text x="{:.1}" y="{:.1}" font-size="10" text-anchor="end" fill="#444">{}</text>"##,
            PAD_LEFT - 6.0,
            y + 3.0,
            format_tick(value, span)
        );
    }

    let Some(dates) = chart.series.iter().max_by_key(|s| s.points.len()) else {
        return;
    };
    let ticks = X_TICKS.min(frame.count);
    for t in 0..ticks {
        let index = if ticks > 1 {
            t * (frame.count - 1) / (ticks - 1)
        } else {
            0
        };
        let x = frame.x(index);
        let _ = write!(
            svg,
            r##"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="#e5e5e5" stroke-width="1"/>"##,
            PAD_TOP,
            frame.height - PAD_BOTTOM,
        );
        if let Some((date, _)) = dates.points.get(index) {
            let _ = write!(
                svg,
                r##"<text x="{x:.1}" y="{:.1}" font-size="10" text-anchor="middle" fill="#444">{}</text>"##,
                frame.height - 8.0,
                date.format("%Y-%m-%d")
            );
        }
    }
}

fn write_series(svg: &mut String, frame: &Frame, series: &SeriesSpec) {
    let mut segment: Vec<String> = Vec::new();
    for (i, (_, value)) in series.points.iter().enumerate() {
        match value {
            Some(v) => segment.push(format!("{:.1},{:.1}", frame.x(i), frame.y(*v))),
            None => flush_segment(svg, series.color, &mut segment),
        }
    }
    flush_segment(svg, series.color, &mut segment);
}

/// Emit one polyline for a run of defined points.
fn flush_segment(svg: &mut String, color: &str, segment: &mut Vec<String>) {
    if segment.is_empty() {
        return;
    }
    let _ = write!(
        svg,
        r#"<polyline fill="none" stroke="{}" stroke-width="1.5" points="{}"/>"#,
        color,
        segment.join(" ")
    );
    segment.clear();
}

fn write_legend(svg: &mut String, series: &[SeriesSpec]) {
    let mut x = PAD_LEFT + 8.0;
    let y = PAD_TOP + 10.0;
    for s in series {
        let _ = write!(
            svg,
            r##"<line x1="{x:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-width="2"/><text x="{:.1}" y="{:.1}" font-size="11" fill="#222">{}</text>"##,
            x + 16.0,
            s.color,
            x + 20.0,
            y + 4.0,
            escape(&s.label)
        );
        x += 28.0 + 7.0 * s.label.len() as f64;
    }
}

fn format_tick(value: f64, span: f64) -> String {
    if span >= 50.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
