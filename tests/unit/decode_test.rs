//! Unit tests for decoding search responses

use super::helpers::{load_fixture, load_response};

use ignite_sessions::search::{self, zero_timestamp};
use ignite_sessions::{completeness, Completeness, Error};

#[test]
fn fixture_decodes_all_sessions() {
    let resp = load_response("search_response.json");
    assert_eq!(resp.total, 4);
    assert_eq!(resp.items.len(), 4);

    let codes: Vec<&str> = resp.items.iter().map(|s| s.session_code.as_str()).collect();
    assert_eq!(codes, vec!["BRK2045", "BRK3075", "THR1020", "KEY01"]);
}

#[test]
fn fixture_keeps_list_fields_in_order() {
    let resp = load_response("search_response.json");
    let first = &resp.items[0];
    assert_eq!(first.speaker_names, vec!["Ada Lovelace", "Grace Hopper"]);
    assert_eq!(first.speaker_ids, vec!["sp-1", "sp-2"]);
    assert_eq!(
        first.products,
        vec!["Azure Kubernetes Service", "Azure Container Registry"]
    );
    assert_eq!(first.learning_path, vec!["Apps"]);
    assert!(first.visible_in_session_listing);
}

#[test]
fn partial_sessions_fill_zero_values() {
    let resp = load_response("search_response.json");
    let theater = &resp.items[2];
    assert!(theater.products.is_empty());
    assert!(theater.speaker_names.is_empty());
    assert_eq!(theater.session_instance_id, "");
    assert_eq!(theater.sort_rank, 0);
}

#[test]
fn missing_last_update_is_zero_instant() {
    let resp = search::decode(br#"{"data": [{"sessionId": "x"}], "total": 1}"#).unwrap();
    assert_eq!(resp.items[0].last_update, zero_timestamp());
}

#[test]
fn facets_keep_server_order() {
    let resp = load_response("search_response.json");
    let values: Vec<&str> = resp
        .facets
        .level
        .filters
        .iter()
        .map(|f| f.value.as_str())
        .collect();
    assert_eq!(
        values,
        vec!["Foundational (100)", "Intermediate (200)", "Advanced (300)"]
    );
    assert_eq!(resp.facets.duration_in_minutes.filters[3].value, 90);
    assert!(!resp.facets.duration_in_minutes.visible);
}

#[test]
fn truncated_fixture_is_a_decode_error() {
    let body = load_fixture("search_response.json");
    let truncated = &body.as_bytes()[..body.len() / 2];
    assert!(matches!(search::decode(truncated), Err(Error::Decode(_))));
}

#[test]
fn complete_fixture_passes_check() {
    let resp = load_response("two_sessions.json");
    assert!(completeness::is_complete(&resp));
    assert_eq!(completeness::check(&resp), Completeness::Complete);
}

#[test]
fn incomplete_fixture_reports_counts() {
    let resp = load_response("incomplete_response.json");
    assert_eq!(
        completeness::check(&resp),
        Completeness::Incomplete {
            received: 2,
            expected: 5
        }
    );
    // The data is left as returned
    assert_eq!(resp.items.len(), 2);
}
