//! Search request payload and headers
//!
//! The request body is fixed: every run asks for the same page of sessions
//! with the same facet and date filters.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, HOST};
use reqwest::Url;
use serde::Serialize;

/// Number of sessions requested in the single page we fetch.
pub const ITEMS_PER_PAGE: u32 = 600;

/// Session types the search is restricted to.
pub const SESSION_TYPES: [&str; 3] = [
    "Breakout: 75 Minute",
    "Breakout: 45 Minute",
    "Theater: 20 Minute",
];

/// Session formats the search is restricted to.
pub const FORMATS: [&str; 4] = [
    "Session",
    "Partner Led Session",
    "Panel Discussion",
    "Customer Showcase",
];

/// Conference days covered by the date filter.
const CONFERENCE_DAYS: [&str; 6] = [
    "2019-11-03",
    "2019-11-04",
    "2019-11-05",
    "2019-11-06",
    "2019-11-07",
    "2019-11-08",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub items_per_page: u32,
    pub search_text: String,
    pub search_page: u32,
    pub sort_option: String,
    pub search_facets: SearchFacets,
    pub recommended_item_ids: Vec<String>,
    pub favorites_ids: Vec<String>,
    pub must_have_on_demand_video: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFacets {
    pub facets: Vec<FacetFilter>,
    pub personalization_facets: Vec<FacetFilter>,
    pub date_facet: Vec<DateRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetFilter {
    pub facet_name: String,
    pub display_name: String,
    pub names: Vec<String>,
}

impl FacetFilter {
    fn new(facet_name: &str, names: &[&str]) -> Self {
        Self {
            facet_name: facet_name.to_string(),
            // The service labels a facet filter with its first selected name
            display_name: names.first().copied().unwrap_or_default().to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// One conference day, as an inclusive UTC range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date_time: String,
    pub end_date_time: String,
}

impl DateRange {
    fn day(date: &str) -> Self {
        Self {
            start_date_time: format!("{}T13:30:00.000Z", date),
            end_date_time: format!("{}T23:59:59.000Z", date),
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            items_per_page: ITEMS_PER_PAGE,
            search_text: "*".to_string(),
            search_page: 1,
            sort_option: "ASC".to_string(),
            search_facets: SearchFacets {
                facets: vec![
                    FacetFilter::new("sessionType", &SESSION_TYPES),
                    FacetFilter::new("format", &FORMATS),
                ],
                personalization_facets: Vec::new(),
                date_facet: CONFERENCE_DAYS.iter().map(|d| DateRange::day(d)).collect(),
            },
            recommended_item_ids: Vec::new(),
            favorites_ids: Vec::new(),
            must_have_on_demand_video: false,
        }
    }
}

/// Headers sent with every search request.
///
/// `Host` is taken from the endpoint URL; it is omitted if the URL has no host.
pub fn headers(endpoint: &Url) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    if let Some(host) = host_header(endpoint) {
        if let Ok(value) = HeaderValue::from_str(&host) {
            headers.insert(HOST, value);
        }
    }

    headers
}

fn host_header(endpoint: &Url) -> Option<String> {
    let host = endpoint.host_str()?;
    Some(match endpoint.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
