use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::remote::http::Client;
use crate::remote::stats::{self, TotalHits, TotalPageViews};
use crate::render::{self, ReportStyle};

/// Everything fetched for one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<TotalPageViews>,
    #[serde(flatten)]
    pub hits: TotalHits,
}

impl Snapshot {
    /// Totals block (when fetched) above the per-path report.
    pub fn render(&self, style: &ReportStyle) -> String {
        let report = render::render(&self.hits, style);
        match &self.totals {
            Some(totals) => format!("{}\n{report}", render::render_totals(totals, style)),
            None => report,
        }
    }
}

/// Fetch hits, and site totals when `with_totals` is set. The first
/// failure aborts the whole run.
///
/// # Errors
///
/// Returns the first fetch, API or decode error encountered.
pub fn fetch(config: &Config, with_totals: bool) -> Result<Snapshot> {
    let client = Client::new(config)?;
    let totals = if with_totals {
        Some(stats::get_total_page_views(&client)?)
    } else {
        None
    };
    let hits = stats::get_total_hits(&client)?;
    tracing::debug!(paths = hits.hits.len(), "fetched hits");
    Ok(Snapshot { totals, hits })
}
