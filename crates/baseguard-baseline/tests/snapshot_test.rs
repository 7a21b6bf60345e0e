//! Tests for Baseline snapshot loading and lookups.

use baseguard_core::errors::SnapshotError;
use baseguard_core::traits::BaselineSource;
use baseguard_core::types::BaselineStatus;
use baseguard_baseline::{BaselineSnapshot, SnapshotResolver};
use chrono::NaiveDate;

const DUMP: &str = r#"{
    "features": {
        "grid": {
            "name": "Grid",
            "baseline": {
                "status": "widely",
                "low_date": "2020-01-29",
                "high_date": "2022-07-29"
            },
            "spec_url": "https://drafts.csswg.org/css-grid-2/",
            "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/grid"
        },
        "container-queries": {
            "name": "Container queries",
            "baseline": {
                "status": "newly",
                "low_date": "2023-02-14"
            }
        },
        "anchor-positioning": {
            "name": "Anchor positioning",
            "description": "Tether an element to an anchor",
            "baseline": {
                "status": "limited"
            }
        }
    }
}"#;

/// SNAP-01: a dump parses with statuses, dates, and links intact
#[test]
fn test_parse_dump() {
    let snapshot = BaselineSnapshot::from_json_str(DUMP).unwrap();
    assert_eq!(snapshot.len(), 3);

    let grid = snapshot.get("grid").unwrap();
    assert_eq!(grid.id, "grid");
    assert_eq!(grid.baseline.status, BaselineStatus::Widely);
    assert_eq!(
        grid.baseline.high_date,
        NaiveDate::from_ymd_opt(2022, 7, 29)
    );
    assert!(grid.mdn_url.is_some());

    let cq = snapshot.get("container-queries").unwrap();
    assert_eq!(cq.baseline_year(), Some(2023));
    assert_eq!(cq.baseline.high_date, None);

    let anchor = snapshot.get("anchor-positioning").unwrap();
    assert_eq!(anchor.baseline.status, BaselineStatus::Limited);
    assert_eq!(anchor.baseline_year(), None);
}

/// SNAP-02: lookups for missing IDs degrade to Unknown, never error
#[test]
fn test_missing_id_is_unknown() {
    let snapshot = BaselineSnapshot::from_json_str(DUMP).unwrap();
    assert_eq!(snapshot.status("not-a-feature"), BaselineStatus::Unknown);
    assert!(snapshot.get("not-a-feature").is_none());
}

/// SNAP-03: an empty dataset is a valid snapshot
#[test]
fn test_empty_dump() {
    let snapshot = BaselineSnapshot::from_json_str(r#"{"features": {}}"#).unwrap();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.status("grid"), BaselineStatus::Unknown);

    // A dump with no features key at all is treated the same way.
    let bare = BaselineSnapshot::from_json_str("{}").unwrap();
    assert!(bare.is_empty());
}

/// SNAP-04: a record with an unrecognized status is kept as Unknown
#[test]
fn test_unrecognized_status_kept() {
    let snapshot = BaselineSnapshot::from_json_str(
        r#"{
            "features": {
                "speculative-thing": {
                    "name": "Speculative thing",
                    "baseline": { "status": "proposed" }
                }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(
        snapshot.status("speculative-thing"),
        BaselineStatus::Unknown
    );
}

/// SNAP-05: malformed JSON surfaces as SnapshotError::ParseError
#[test]
fn test_malformed_json() {
    let result = BaselineSnapshot::from_json_str("{\"features\": [");
    match result {
        Err(SnapshotError::ParseError(_)) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

/// SNAP-06: from_path loads a dump from disk and reports IO errors
#[test]
fn test_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("baseline-snapshot.json");
    std::fs::write(&path, DUMP).unwrap();

    let snapshot = BaselineSnapshot::from_path(&path).unwrap();
    assert_eq!(snapshot.len(), 3);

    let missing = BaselineSnapshot::from_path(&dir.path().join("nope.json"));
    match missing {
        Err(SnapshotError::IoError { .. }) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
}

/// SNAP-07: the resolver seam exposes snapshot data to the engine
#[test]
fn test_resolver_seam() {
    let snapshot = BaselineSnapshot::from_json_str(DUMP).unwrap();
    let resolver = SnapshotResolver::new(snapshot);

    let source: &dyn BaselineSource = &resolver;
    assert_eq!(source.status("grid"), BaselineStatus::Widely);
    assert_eq!(source.status("container-queries"), BaselineStatus::Newly);
    assert_eq!(source.status("missing"), BaselineStatus::Unknown);
    assert_eq!(
        source.info("container-queries").map(|i| i.name.as_str()),
        Some("Container queries")
    );
}
