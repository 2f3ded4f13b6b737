pub mod layout;
pub mod plot;

use crate::remote::stats::{Hit, TotalHits, TotalPageViews};

use layout::{Block, BoxStyle, Line};
use plot::PlotConfig;

const NO_HITS: &str = "No hits found";
const NO_DATA: &str = " no data";

/// Everything the renderer needs to know about presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    pub header: BoxStyle,
    pub plot: PlotConfig,
    /// Emit ANSI colour and weight codes.
    pub ansi: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            header: BoxStyle::default(),
            plot: PlotConfig::sparkline(),
            ansi: true,
        }
    }
}

impl ReportStyle {
    /// Same geometry, no escape codes.
    pub fn plain() -> Self {
        Self {
            ansi: false,
            ..Self::default()
        }
    }
}

/// Render the per-path report, one entry per hit in API order, each
/// followed by a newline. An empty list renders a single notice block.
pub fn render(hits: &TotalHits, style: &ReportStyle) -> String {
    if hits.hits.is_empty() {
        return style.header.render(NO_HITS, style.ansi).to_string();
    }
    render_entries(hits, style)
        .into_iter()
        .map(|entry| entry + "\n")
        .collect()
}

/// The header-and-chart entry for every hit, without separators.
pub fn render_entries(hits: &TotalHits, style: &ReportStyle) -> Vec<String> {
    hits.hits.iter().map(|hit| render_hit(hit, style)).collect()
}

/// Replace control characters (newlines, tabs, escape sequences) in text
/// received from the server so it cannot reshape the box or drive the
/// terminal.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { char::REPLACEMENT_CHARACTER } else { c })
        .collect()
}

fn render_hit(hit: &Hit, style: &ReportStyle) -> String {
    let header = style.header.render(
        &format!(
            "Title: {}, hits: {}, path: {}",
            sanitize(&hit.title),
            hit.total_count,
            sanitize(&hit.path)
        ),
        style.ansi,
    );
    let chart = if hit.daily_stats.is_empty() {
        Block::new(vec![Line::plain(NO_DATA)])
    } else {
        plot::chart(&hit.daily_series(), &style.plot).into_block(style.ansi)
    };
    layout::join_horizontal(&[header, chart])
}

/// Site-wide counters as a single header block.
pub fn render_totals(totals: &TotalPageViews, style: &ReportStyle) -> String {
    style
        .header
        .render(
            &format!(
                "Pageviews: {}, events: {}, total (UTC): {}",
                totals.total, totals.total_events, totals.total_utc
            ),
            style.ansi,
        )
        .to_string()
}
