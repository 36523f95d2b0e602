// Core structs: Listing, ListingDetail, FilterCriteria and error types
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Listing identifier as handed out by the marketplace API.
/// The API uses integers, the seed data uses strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Num(i64),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Num(n) => write!(f, "{}", n),
            ListingId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "num_reviews",
        alias = "reviewCount"
    )]
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Inclusive range of calendar days blocked by an approved booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Payload of `GET /listings/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: Listing,
    /// Owner display name.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub unavailable_dates: Vec<DateRange>,
}

impl ListingDetail {
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        !self.unavailable_dates.iter().any(|r| r.contains(date))
    }
}

/// One fetched listing set together with the time it was fetched.
#[derive(Debug, Clone)]
pub struct ListingSnapshot {
    pub listings: Vec<Listing>,
    pub fetched_at: DateTime<Utc>,
}

impl ListingSnapshot {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            fetched_at: Utc::now(),
        }
    }
}

/// Criteria for a single filter run. Unset fields mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub tag: Option<String>,
    pub max_price: Option<f64>,
    pub search_tags: Vec<String>,
    /// Case-insensitive substring of the title or description.
    pub text: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("listing not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
