//! Snapshot loading from disk and readers.

use std::io::Write;

use halal_screen_core::{CoreError, ScreenReport, Snapshot};
use tempfile::{tempdir, NamedTempFile};

#[test]
fn loads_snapshot_file_and_screens_it() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "symbol": "halx",
            "figures": {{"Long_Term_Debt": 100, "Total_Assets": 1000, "Goodwill_And_Intangibles": 100}},
            "info": {{
                "marketCap": 1000, "totalCash": 100, "shortTermInvestments": 100,
                "longTermInvestments": 100, "netReceivables": 100,
                "sector": "Technology", "industry": "Software",
                "longName": "Halal Tech", "longBusinessSummary": "A software company."
            }}
        }}"#
    )
    .expect("write snapshot");

    let report = Snapshot::from_path(file.path()).expect("load").screen();

    let compliance = report.compliance.expect("determinate");
    assert!(compliance.is_fully_compliant);
    assert_eq!(compliance.debt_ratio, Some(11.11));
}

#[test]
fn legacy_financials_key_is_accepted() {
    let snapshot = Snapshot::from_reader(
        r#"{"financials": {"longTermDebt": 400, "totalAssets": 1000, "goodwillAndIntangibles": 100}}"#
            .as_bytes(),
    )
    .expect("parses");

    assert_eq!(snapshot.figures.long_term_debt, Some(400.0));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    let err = Snapshot::from_path(dir.path().join("absent.json")).expect_err("must fail");
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = Snapshot::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn report_round_trips_through_json_with_null_verdict() {
    let report = Snapshot::default().screen();
    let json = serde_json::to_value(&report).expect("serializes");

    assert!(json["compliance"].is_null());
    assert!(json["figures"]["long_term_debt"].is_null());

    let back: ScreenReport = serde_json::from_value(json).expect("deserializes");
    assert_eq!(back, report);
}
