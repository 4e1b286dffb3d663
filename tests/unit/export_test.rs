//! Unit tests for export module

use super::helpers::{load_fixture, load_response, read_csv};

use ignite_sessions::export::{self, Layout, HEADER};
use ignite_sessions::SearchResponse;
use std::fs;
use tempfile::TempDir;

fn header_row() -> Vec<String> {
    HEADER.iter().map(|h| h.to_string()).collect()
}

#[test]
fn json_dump_preserves_every_field() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ignite_search_results.json");

    let resp = load_response("search_response.json");
    export::write_json(&resp, &path).unwrap();

    let reloaded = export::read_json(&path).unwrap();
    assert_eq!(reloaded, resp);
}

#[test]
fn json_dump_matches_source_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dump.json");

    let source: serde_json::Value =
        serde_json::from_str(&load_fixture("search_response.json")).unwrap();
    export::write_json(&load_response("search_response.json"), &path).unwrap();
    let dumped: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(dumped["total"], source["total"]);
    assert_eq!(dumped["facets"], source["facets"]);
    for (out, src) in dumped["data"]
        .as_array()
        .unwrap()
        .iter()
        .zip(source["data"].as_array().unwrap())
    {
        assert_eq!(out["sessionId"], src["sessionId"]);
        assert_eq!(out["title"], src["title"]);
        assert_eq!(out["speakerNames"], src["speakerNames"]);
    }
    // Unknown fields are not carried over
    assert!(dumped["data"][3].get("unexpectedField").is_none());
}

#[test]
fn two_session_example_partitions_as_expected() {
    let temp = TempDir::new().unwrap();
    let resp = load_response("two_sessions.json");

    let report = export::write_csv(&resp, Layout::Detailed, temp.path()).unwrap();

    let bo45 = read_csv(&temp.path().join("session/bo45/all.csv"));
    assert_eq!(bo45.len(), 2);
    assert_eq!(bo45[0], header_row());
    assert_eq!(
        bo45[1],
        vec![
            "s-1",
            "BRK1001",
            "Getting started",
            "Breakout: 45 Minute Session",
            "Foundational (100)",
            "Session",
            "A;B;C",
            "2019-10-30T12:00:00Z",
        ]
    );

    for bucket in ["session/bo75/all.csv", "session/th20/all.csv"] {
        assert_eq!(read_csv(&temp.path().join(bucket)), vec![header_row()]);
    }

    assert_eq!(report.unclassified, vec!["Keynote"]);
}

#[test]
fn every_session_lands_in_at_most_one_bucket() {
    let temp = TempDir::new().unwrap();
    let resp = load_response("search_response.json");

    let report = export::write_csv(&resp, Layout::Detailed, temp.path()).unwrap();

    let mut ids: Vec<String> = report
        .files
        .iter()
        .flat_map(|(path, _)| read_csv(path).into_iter().skip(1).map(|row| row[0].clone()))
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["a1f0c3d2-0001", "a1f0c3d2-0002", "a1f0c3d2-0003"]);
    assert_eq!(
        report.rows_written() + report.unclassified.len(),
        resp.items.len()
    );
}

#[test]
fn offsets_are_kept_in_last_update() {
    let temp = TempDir::new().unwrap();
    let resp = load_response("search_response.json");
    export::write_csv(&resp, Layout::Detailed, temp.path()).unwrap();

    let bo75 = read_csv(&temp.path().join("session/bo75/all.csv"));
    assert_eq!(bo75[1][7], "2019-10-29T08:15:00-07:00");
}

#[test]
fn simple_layout_splits_breakout_and_theater() {
    let temp = TempDir::new().unwrap();
    let resp = load_response("search_response.json");

    let report = export::write_csv(&resp, Layout::Simple, temp.path()).unwrap();

    let breakout = read_csv(&temp.path().join("ignite_breakout_sessions.csv"));
    let theater = read_csv(&temp.path().join("ignite_theater_sessions.csv"));
    assert_eq!(breakout.len(), 3);
    assert_eq!(theater.len(), 2);
    assert_eq!(report.unclassified, vec!["Keynote"]);
    assert!(!temp.path().join("session").exists());
}

#[test]
fn empty_response_writes_headers_only() {
    let temp = TempDir::new().unwrap();
    let report =
        export::write_csv(&SearchResponse::default(), Layout::Simple, temp.path()).unwrap();
    assert_eq!(report.rows_written(), 0);
    for (path, _) in &report.files {
        assert_eq!(read_csv(path), vec![header_row()]);
    }
}

#[test]
fn summary_lists_fixture_facets() {
    let resp = load_response("search_response.json");
    let mut out = Vec::new();
    export::print_summary(&resp, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("#### Received 4 results in total"));
    assert!(output.contains("SESSIONTYPE: 4 Categories\n-------------------------\n"));
    assert!(output.contains("LEVEL: 3 Categories\n-------------------\n0. Foundational (100): 2\n"));
    assert!(output.contains("PRODUCTS: 3 Categories"));
    assert!(output.contains("LEARNINGPATH: 1 Categories"));
    assert!(output.contains("FORMAT: 2 Categories"));
    assert!(!output.contains("TOPIC"));
    assert!(!output.contains("DURATIONINMINUTES"));
}
