use serde::{Deserialize, Serialize};

use super::http::Client;
use crate::error::{Error, Result};

pub const TOTAL_PATH: &str = "/api/v0/stats/total";
pub const HITS_PATH: &str = "/api/v0/stats/hits";

/// Site-wide pageview counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TotalPageViews {
    pub total: i64,
    pub total_events: i64,
    pub total_utc: i64,
}

/// One day of traffic for a single path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HitData {
    pub day: String,
    #[serde(rename = "daily")]
    pub daily_count: i64,
    /// 24 hourly buckets, midnight first.
    #[serde(rename = "hourly")]
    pub hourly_counts: Vec<i64>,
}

/// A tracked path with its totals and daily series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Hit {
    pub path: String,
    pub title: String,
    #[serde(rename = "count")]
    pub total_count: i64,
    pub path_id: i64,
    #[serde(rename = "max")]
    pub max_single_day: i64,
    #[serde(rename = "event")]
    pub is_event: bool,
    #[serde(rename = "stats")]
    pub daily_stats: Vec<HitData>,
}

impl Hit {
    /// Daily counts in the order the API returned them.
    #[allow(clippy::cast_precision_loss)]
    pub fn daily_series(&self) -> Vec<f64> {
        self.daily_stats.iter().map(|d| d.daily_count as f64).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TotalHits {
    pub hits: Vec<Hit>,
}

/// Decode the body of `GET /api/v0/stats/total`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not a JSON object of the
/// expected shape.
pub fn decode_totals(body: &[u8]) -> Result<TotalPageViews> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        endpoint: "total page views",
        source,
    })
}

/// Decode the body of `GET /api/v0/stats/hits`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not a JSON object of the
/// expected shape.
pub fn decode_hits(body: &[u8]) -> Result<TotalHits> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        endpoint: "hits",
        source,
    })
}

/// Fetch site-wide totals via `GET /api/v0/stats/total`.
///
/// # Errors
///
/// Returns an error if the server is unreachable, returns a status >= 300,
/// or the response body cannot be decoded.
pub fn get_total_page_views(client: &Client) -> Result<TotalPageViews> {
    decode_totals(&client.get(TOTAL_PATH)?)
}

/// Fetch per-path hits via `GET /api/v0/stats/hits`.
///
/// # Errors
///
/// Returns an error if the server is unreachable, returns a status >= 300,
/// or the response body cannot be decoded.
pub fn get_total_hits(client: &Client) -> Result<TotalHits> {
    decode_hits(&client.get(HITS_PATH)?)
}
