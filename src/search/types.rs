//! Search API response model
//!
//! Field names follow the wire format of the session search service. Every
//! field is optional on the wire: missing or `null` values decode to their
//! zero value, unknown fields are ignored.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Full response of one search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(rename = "data", deserialize_with = "nullable")]
    pub items: Vec<Session>,
    #[serde(deserialize_with = "nullable")]
    pub facets: FacetSet,
    #[serde(deserialize_with = "nullable")]
    pub total: i64,
}

impl SearchResponse {
    /// Decode a response body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::Decode)
    }
}

/// A single session as returned by the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "@search.score", deserialize_with = "nullable")]
    pub score: f64,
    #[serde(deserialize_with = "nullable")]
    pub session_id: String,
    #[serde(deserialize_with = "nullable")]
    pub session_instance_id: String,
    #[serde(deserialize_with = "nullable")]
    pub session_code: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub sort_title: String,
    #[serde(deserialize_with = "nullable")]
    pub sort_rank: i64,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub registration_link: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date_time: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date_time: String,
    #[serde(deserialize_with = "nullable")]
    pub duration_in_minutes: i64,
    #[serde(deserialize_with = "nullable")]
    pub session_type: String,
    #[serde(deserialize_with = "nullable")]
    pub session_type_logical: String,
    #[serde(deserialize_with = "nullable")]
    pub learning_path: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub level: String,
    #[serde(deserialize_with = "nullable")]
    pub products: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub format: String,
    #[serde(deserialize_with = "nullable")]
    pub topic: String,
    #[serde(deserialize_with = "nullable")]
    pub session_type_id: String,
    #[serde(deserialize_with = "nullable")]
    pub is_mandatory: bool,
    #[serde(deserialize_with = "nullable")]
    pub visible_in_session_listing: bool,
    #[serde(deserialize_with = "nullable")]
    pub tech_community_discussion_id: String,
    #[serde(deserialize_with = "nullable")]
    pub speaker_ids: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub speaker_names: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub speaker_companies: Vec<String>,
    #[serde(rename = "sessionLinks", deserialize_with = "nullable")]
    pub session_links: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub marketing_campaign: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub links: String,
    #[serde(deserialize_with = "nullable_timestamp")]
    pub last_update: DateTime<FixedOffset>,
    #[serde(deserialize_with = "nullable")]
    pub child_modules: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub sibling_modules: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0.0,
            session_id: String::new(),
            session_instance_id: String::new(),
            session_code: String::new(),
            title: String::new(),
            sort_title: String::new(),
            sort_rank: 0,
            description: String::new(),
            registration_link: String::new(),
            start_date_time: String::new(),
            end_date_time: String::new(),
            duration_in_minutes: 0,
            session_type: String::new(),
            session_type_logical: String::new(),
            learning_path: Vec::new(),
            level: String::new(),
            products: Vec::new(),
            format: String::new(),
            topic: String::new(),
            session_type_id: String::new(),
            is_mandatory: false,
            visible_in_session_listing: false,
            tech_community_discussion_id: String::new(),
            speaker_ids: Vec::new(),
            speaker_names: Vec::new(),
            speaker_companies: Vec::new(),
            session_links: Vec::new(),
            marketing_campaign: Vec::new(),
            links: String::new(),
            last_update: zero_timestamp(),
            child_modules: Vec::new(),
            sibling_modules: Vec::new(),
        }
    }
}

/// Filterable dimensions of the catalog with pre-aggregated counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacetSet {
    #[serde(deserialize_with = "nullable")]
    pub duration_in_minutes: FacetNum,
    #[serde(deserialize_with = "nullable")]
    pub session_type: Facet,
    #[serde(deserialize_with = "nullable")]
    pub learning_path: Facet,
    #[serde(deserialize_with = "nullable")]
    pub level: Facet,
    #[serde(deserialize_with = "nullable")]
    pub products: Facet,
    #[serde(deserialize_with = "nullable")]
    pub format: Facet,
    #[serde(deserialize_with = "nullable")]
    pub topic: Facet,
    #[serde(deserialize_with = "nullable")]
    pub session_type_id: Facet,
}

/// A facet with string filter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Facet {
    #[serde(deserialize_with = "nullable")]
    pub display_name: String,
    #[serde(deserialize_with = "nullable")]
    pub facet_name: String,
    #[serde(rename = "isVisible", deserialize_with = "nullable")]
    pub visible: bool,
    #[serde(deserialize_with = "nullable")]
    pub filters: Vec<Filter>,
}

/// A facet with integer filter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacetNum {
    #[serde(deserialize_with = "nullable")]
    pub display_name: String,
    #[serde(deserialize_with = "nullable")]
    pub facet_name: String,
    #[serde(rename = "isVisible", deserialize_with = "nullable")]
    pub visible: bool,
    #[serde(deserialize_with = "nullable")]
    pub filters: Vec<FilterNum>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    #[serde(deserialize_with = "nullable")]
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterNum {
    #[serde(deserialize_with = "nullable")]
    pub value: i64,
    #[serde(deserialize_with = "nullable")]
    pub count: i64,
}

/// The timestamp used when `lastUpdate` is absent: 0001-01-01T00:00:00Z.
pub fn zero_timestamp() -> DateTime<FixedOffset> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
        .and_utc()
        .fixed_offset()
}

/// Treat an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<FixedOffset>>::deserialize(deserializer)?.unwrap_or_else(zero_timestamp))
}
