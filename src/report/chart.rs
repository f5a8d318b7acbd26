//! Inline SVG pie chart of the verdict breakdown.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use crate::analysis::Verdict;

const RADIUS: f64 = 110.0;
const CENTER: f64 = 130.0;
const EMPTY_COLOR: &str = "#BDBDBD";

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub color: &'static str,
    pub fraction: f64,
}

impl PieSlice {
    pub fn percent(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

pub fn slices(histogram: &[(Verdict, usize)]) -> Vec<PieSlice> {
    let total: usize = histogram.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return vec![PieSlice {
            label: "No comments".to_string(),
            color: EMPTY_COLOR,
            fraction: 1.0,
        }];
    }
    histogram
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(verdict, n)| PieSlice {
            label: format!("{} ({})", verdict, n),
            color: verdict.color(),
            fraction: *n as f64 / total as f64,
        })
        .collect()
}

fn point(angle: f64, radius: f64) -> (f64, f64) {
    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

/// Renders the chart with a legend to the right. Slices run clockwise from
/// twelve o'clock.
pub fn render_svg(histogram: &[(Verdict, usize)]) -> String {
    let slices = slices(histogram);
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="460" height="290" viewBox="0 0 460 290" role="img">"#
    );
    let _ = write!(
        svg,
        r#"<title>Comment Authenticity Breakdown</title><text x="{CENTER}" y="14" text-anchor="middle" font-size="13" font-weight="bold">Comment Authenticity Breakdown</text>"#
    );

    let mut start = -FRAC_PI_2;
    for slice in &slices {
        if slice.fraction >= 0.9999 {
            let _ = write!(
                svg,
                r#"<circle cx="{CENTER}" cy="{CENTER}" r="{RADIUS}" fill="{}"/>"#,
                slice.color
            );
        } else {
            let end = start + slice.fraction * TAU;
            let (x1, y1) = point(start, RADIUS);
            let (x2, y2) = point(end, RADIUS);
            let large_arc = u8::from(slice.fraction > 0.5);
            let _ = write!(
                svg,
                r#"<path d="M{CENTER},{CENTER} L{x1:.2},{y1:.2} A{RADIUS},{RADIUS} 0 {large_arc} 1 {x2:.2},{y2:.2} Z" fill="{}"/>"#,
                slice.color
            );
        }
        let (lx, ly) = point(start + slice.fraction * TAU / 2.0, RADIUS * 0.6);
        let _ = write!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" font-size="11">{}</text>"#,
            slice.percent()
        );
        start += slice.fraction * TAU;
    }

    for (i, slice) in slices.iter().enumerate() {
        let y = 40.0 + i as f64 * 22.0;
        let _ = write!(
            svg,
            r#"<rect x="270" y="{y}" width="14" height="14" fill="{}"/><text x="292" y="{:.0}" font-size="12">{}</text>"#,
            slice.color,
            y + 11.0,
            slice.label
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_cover_the_whole_pie() {
        let slices = slices(&[(Verdict::Real, 3), (Verdict::Fake, 1)]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "real (3)");
        assert_eq!(slices[0].percent(), "75.0%");
        assert_eq!(slices[1].percent(), "25.0%");
        let sum: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_histogram_shows_placeholder() {
        let svg = render_svg(&[]);
        assert!(svg.contains("No comments"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn single_verdict_is_a_full_circle() {
        let svg = render_svg(&[(Verdict::Fake, 4)]);
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
        assert!(svg.contains("100.0%"));
    }

    #[test]
    fn mixed_verdicts_draw_one_path_each() {
        let svg = render_svg(&[(Verdict::Real, 1), (Verdict::LikelyReal, 1), (Verdict::Fake, 2)]);
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains(Verdict::LikelyReal.color()));
        assert!(svg.ends_with("</svg>"));
    }
}
