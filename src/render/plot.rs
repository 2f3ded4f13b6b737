//! Small line charts drawn with box-drawing characters against a labelled
//! `┤` axis.

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use super::layout::{Block, Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Chart rows above the lowest one. Values below 1 are treated as 1.
    pub height: usize,
    /// Number of columns the series is stretched to; `0` keeps its length.
    pub width: usize,
    /// Decimal places on axis labels before magnitude adjustment.
    pub precision: usize,
    /// Columns reserved left of the plot for the labels and the axis.
    pub offset: usize,
    pub label_color: Option<Color>,
}

impl PlotConfig {
    /// The compact chart shown next to each path in the report.
    pub const fn sparkline() -> Self {
        Self {
            height: 2,
            width: 20,
            precision: 0,
            offset: 3,
            label_color: Some(Color::Green),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    fn blank() -> Self {
        Self::plain(" ")
    }

    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: None,
        }
    }
}

/// A laid-out chart; rows are top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chart {
    rows: Vec<Vec<Cell>>,
}

impl Chart {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render each row with trailing blanks removed.
    pub fn lines(&self, ansi: bool) -> Vec<Line> {
        self.rows
            .iter()
            .map(|row| {
                let last = row.iter().rposition(|c| c.text != " ").unwrap_or(0);
                let mut text = String::new();
                let mut width = 0;
                for cell in &row[..=last] {
                    width += cell.text.width();
                    match (cell.color, ansi) {
                        (Some(color), true) => text.push_str(&cell.text.color(color).to_string()),
                        _ => text.push_str(&cell.text),
                    }
                }
                Line::styled(text, width)
            })
            .collect()
    }

    pub fn into_block(self, ansi: bool) -> Block {
        Block::new(self.lines(ansi))
    }
}

/// Plot `data` and return it as newline-separated text.
pub fn plot(data: &[f64], cfg: &PlotConfig) -> String {
    let ansi = cfg.label_color.is_some();
    chart(data, cfg)
        .lines(ansi)
        .into_iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lay out the chart for `data`. An empty series yields an empty chart.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn chart(data: &[f64], cfg: &PlotConfig) -> Chart {
    if data.is_empty() {
        return Chart::default();
    }
    let series = if cfg.width >= 2 {
        interpolate(data, cfg.width)
    } else {
        data.to_vec()
    };

    let (minimum, maximum) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let interval = (maximum - minimum).abs();
    let height = cfg.height.max(1);
    let offset = cfg.offset.max(1);
    let ratio = if interval == 0.0 {
        1.0
    } else {
        height as f64 / interval
    };

    let intmin2 = (minimum * ratio).round() as i64;
    let intmax2 = (maximum * ratio).round() as i64;
    let rows = (intmax2 - intmin2).unsigned_abs() as usize;
    let mut grid = vec![vec![Cell::blank(); series.len() + offset]; rows + 1];

    let precision = label_precision(cfg.precision, minimum, maximum);
    let label_width = format!("{maximum:.precision$}")
        .len()
        .max(format!("{minimum:.precision$}").len())
        + 1;

    for y in intmin2..=intmax2 {
        let magnitude = if rows > 0 {
            maximum - ((y - intmin2) as f64 * interval / rows as f64)
        } else {
            y as f64
        };
        let label = format!("{magnitude:>label_width$.precision$}");
        let row = (y - intmin2) as usize;
        let col = offset.saturating_sub(label.len());
        grid[row][col] = Cell {
            text: label,
            color: cfg.label_color,
        };
        grid[row][offset - 1] = Cell::plain("┤");
    }

    // Level of a value counted up from the bottom row.
    let level = |v: f64| -> usize { ((v * ratio).round() as i64 - intmin2).clamp(0, rows as i64) as usize };

    grid[rows - level(series[0])][offset - 1] = Cell::plain("┼");
    for (x, pair) in series.windows(2).enumerate() {
        let (y0, y1) = (level(pair[0]), level(pair[1]));
        let col = x + offset;
        if y0 == y1 {
            grid[rows - y0][col] = Cell::plain("─");
            continue;
        }
        let (end_glyph, start_glyph) = if y0 > y1 { ("╰", "╮") } else { ("╭", "╯") };
        grid[rows - y1][col] = Cell::plain(end_glyph);
        grid[rows - y0][col] = Cell::plain(start_glyph);
        for y in y0.min(y1) + 1..y0.max(y1) {
            grid[rows - y][col] = Cell::plain("│");
        }
    }

    Chart { rows: grid }
}

/// Widen precision for small magnitudes, drop it for large ones.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn label_precision(base: usize, minimum: f64, maximum: f64) -> usize {
    let log_max = if minimum == 0.0 && maximum == 0.0 {
        -1.0
    } else {
        maximum.abs().max(minimum.abs()).log10()
    };
    if log_max < 0.0 {
        if log_max.fract() == 0.0 {
            base + (log_max.abs() - 1.0) as usize
        } else {
            base + log_max.abs() as usize
        }
    } else if log_max > 2.0 {
        0
    } else {
        base
    }
}

/// Stretch `data` to `count` points by linear interpolation, keeping both
/// endpoints.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn interpolate(data: &[f64], count: usize) -> Vec<f64> {
    let spring = (data.len() - 1) as f64 / (count - 1) as f64;
    let mut out = Vec::with_capacity(count);
    out.push(data[0]);
    for i in 1..count - 1 {
        let at = i as f64 * spring;
        let before = at.floor();
        let after = at.ceil();
        let lo = data[before as usize];
        let hi = data[after as usize];
        out.push((hi - lo).mul_add(at - before, lo));
    }
    out.push(data[data.len() - 1]);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn plain(data: &[f64], cfg: &PlotConfig) -> Vec<String> {
        chart(data, cfg)
            .lines(false)
            .into_iter()
            .map(|l| l.text)
            .collect()
    }

    fn labels(lines: &[String]) -> Vec<f64> {
        lines
            .iter()
            .filter_map(|l| l.split(['┤', '┼']).next())
            .filter_map(|s| s.trim().parse().ok())
            .collect()
    }

    #[test]
    fn empty_series_has_no_lines() {
        assert!(chart(&[], &PlotConfig::sparkline()).is_empty());
        assert_eq!(plot(&[], &PlotConfig::sparkline()), "");
    }

    #[test]
    fn constant_series_is_one_flat_row() {
        let lines = plain(&[5.0; 20], &PlotConfig::sparkline());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], format!("  5┼{}", "─".repeat(19)));
    }

    #[test]
    fn constant_series_labels_never_exceed_input() {
        for v in [0.0, 3.0, 7.4, 250.0] {
            let lines = plain(&[v; 20], &PlotConfig::sparkline());
            for label in labels(&lines) {
                assert!(label <= v.round(), "label {label} exceeds {v}");
            }
        }
    }

    #[test]
    fn rising_series_spans_height_plus_one_rows() {
        let lines = plain(&[0.0, 1.0, 2.0], &PlotConfig::sparkline());
        assert_eq!(lines.len(), 3);
        assert_eq!(labels(&lines), vec![2.0, 1.0, 0.0]);
        // starts at the bottom, ends at the top
        assert!(lines[2].contains('┼'));
        assert!(lines[0].ends_with('─'));
    }

    #[test]
    fn large_range_is_scaled_to_height() {
        let lines = plain(&[0.0, 100.0], &PlotConfig::sparkline());
        assert_eq!(lines.len(), 3);
        assert_eq!(labels(&lines), vec![100.0, 50.0, 0.0]);
    }

    #[test]
    fn huge_range_rows_follow_configured_height() {
        assert_eq!(chart(&[0.0, 1e11], &PlotConfig::sparkline()).lines(false).len(), 3);

        let flat = PlotConfig {
            height: 0,
            ..PlotConfig::sparkline()
        };
        let lines = plain(&[0.0, 1e11], &flat);
        assert_eq!(lines.len(), 2);
        assert_eq!(labels(&lines), vec![1e11, 0.0]);
    }

    #[test]
    fn falling_step_uses_down_corners() {
        let cfg = PlotConfig {
            width: 0,
            ..PlotConfig::sparkline()
        };
        let lines = plain(&[2.0, 0.0], &cfg);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('╮'));
        assert!(lines[1].contains('│'));
        assert!(lines[2].contains('╰'));
    }

    #[test]
    fn single_point_is_stretched_flat() {
        let lines = plain(&[4.0], &PlotConfig::sparkline());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].matches('─').count(), 19);
    }

    #[test]
    fn interpolate_keeps_endpoints_and_length() {
        let out = interpolate(&[0.0, 10.0], 11);
        assert_eq!(out.len(), 11);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[10], 10.0);
        assert!((out[5] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn label_precision_adjusts_to_magnitude() {
        assert_eq!(label_precision(2, 0.0, 50.0), 2);
        assert_eq!(label_precision(2, 0.0, 5000.0), 0);
        assert_eq!(label_precision(0, 0.0, 0.05), 1);
        assert_eq!(label_precision(0, 0.0, 0.0), 0);
    }

    #[test]
    fn colored_labels_keep_visible_width() {
        let cfg = PlotConfig::sparkline();
        let colored_lines = chart(&[1.0, 3.0], &cfg).lines(true);
        let plain_lines = chart(&[1.0, 3.0], &cfg).lines(false);
        for (c, p) in colored_lines.iter().zip(&plain_lines) {
            assert_eq!(c.width, p.width);
        }
    }
}
