//! Extractor tests over complete source documents

use crate::types::ExtractionMetadata;
use crate::Extractor;
use dossier_domain::TableKind;

const FLOW_DOC: &str = "\
# APPENDIX: VARIABLES

## TABLE 2: CRITICAL FLOW VARIABLES

| Variable | Current Value | Trend | Insight | Confidence |
| :--- | :--- | :--- | :--- | :--- |
| **Rial Velocity** | 890k/USD | \u{2191} | Accelerating | [High] |
| **(v1.2)** Hormuz Transit Rate | 94% | \u{2192} | Holding | [Med] |
| **(v1.3)** Oil Price Shock Probability | 62% | \u{2191} | **Rising due to Hormuz tension** | [Med] |
";

#[test]
fn test_flow_row_scenario() {
    let result = Extractor::new().extract(FLOW_DOC);
    assert_eq!(result.records.len(), 3);

    // Counter was at 3 for the annotated row.
    let r = &result.records[2];
    assert_eq!(r.id, "FV-03");
    assert_eq!(r.name, "Oil Price Shock Probability");
    assert_eq!(r.table, "flow");
    assert_eq!(r.current_value, "62%");
    assert_eq!(r.trend, "\u{2191}");
    assert_eq!(r.insight, "Rising due to Hormuz tension");
    assert_eq!(r.confidence, "Med");
    assert_eq!(r.version_added, "v1.3");
}

#[test]
fn test_idempotent_re_extraction() {
    let extractor = Extractor::new();
    let first = extractor.extract(FLOW_DOC);
    let second = extractor.extract(FLOW_DOC);
    assert_eq!(first.records, second.records);
    assert_eq!(first.counts, second.counts);
}

#[test]
fn test_header_and_separator_emit_no_records() {
    let doc = "\
## TABLE 1: CRITICAL STOCK VARIABLES

| Variable | Current Value | Trend | Insight | Confidence |
| :--- | :--- | :--- | :--- | :--- |
";
    let result = Extractor::new().extract(doc);
    assert!(result.records.is_empty());
    assert_eq!(result.skipped_rows, 0);
}

#[test]
fn test_counter_monotonic_across_skipped_rows() {
    let doc = "\
## TABLE 1: CRITICAL STOCK VARIABLES

| Variable | Current Value | Trend | Insight | Confidence |
| --- | --- | --- | --- | --- |
| First | a | b | c | [High] |
| Variable | a | b | c | [High] |
| | a | b | c | [High] |
| too | few | cells |
| Second | a | b | c | [Low] |
";
    let result = Extractor::new().extract(doc);
    let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["SV-01", "SV-02"]);
    assert_eq!(result.skipped_rows, 1);
    assert_eq!(result.counts[&TableKind::Stock], 2);
}

#[test]
fn test_counters_are_per_table() {
    let doc = "\
## TABLE 1: CRITICAL STOCK VARIABLES

| Variable | A | B | C | D |
| --- | --- | --- | --- | --- |
| Stock One | a | b | c | [High] |

## TABLE 2: CRITICAL FLOW VARIABLES

| Variable | A | B | C | D |
| --- | --- | --- | --- | --- |
| Flow One | a | b | c | [Med] |
";
    let result = Extractor::new().extract(doc);
    let ids: Vec<&str> = result.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["SV-01", "FV-01"]);
}

#[test]
fn test_unrelated_pipe_block_not_misattributed() {
    let doc = "\
## TABLE 1: CRITICAL STOCK VARIABLES

| Variable | A | B | C | D |
| --- | --- | --- | --- | --- |
| Stock One | a | b | c | [High] |

## Cadence reference

| Variable | A | B | C | D |
| --- | --- | --- | --- | --- |
| Not a stock row | a | b | c | [High] |
";
    // The second block follows no recognized marker; its header must not
    // reopen the stock table.
    let result = Extractor::new().extract(doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, "SV-01");
}

#[test]
fn test_normalization_quality_rows_keep_codes() {
    let doc = "\
### NORMALIZATION QUALITY VARIABLES

| Code | Name | Type | Description | Threshold |
| --- | --- | --- | --- | --- |
| NQ-01 | Sanctions relief depth | Stock | Depth of actual relief | Partial relief within 6 months |
| NQ-02 | Verification access | Flow | IAEA access trajectory | Full access sustained |
";
    let result = Extractor::new().extract(doc);
    assert_eq!(result.records.len(), 2);

    let r = &result.records[0];
    assert_eq!(r.id, "NQ-01");
    assert_eq!(r.name, "Sanctions relief depth");
    assert_eq!(r.table, "normalization_quality");
    assert_eq!(r.insight, "Depth of actual relief");
    assert_eq!(r.confidence, "Med");
    assert_eq!(r.version_added, "v1.4");
    assert_eq!(r.session_added, Some(12));
    assert_eq!(r.nq_type.as_deref(), Some("Stock"));
    assert_eq!(r.nq_threshold.as_deref(), Some("Partial relief within 6 months"));
}

#[test]
fn test_monitoring_notes_collected_in_order() {
    let doc = "\
## TABLE 2: CRITICAL FLOW VARIABLES

| Variable | A | B | C | D |
| --- | --- | --- | --- | --- |
| Flow One | a | b | c | [Med] |

*Variables require weekly recheck on flow and threshold tables.*
*v1.5 NOTE (CRITICAL): daily monitoring through at least March 6.*
";
    let result = Extractor::new().extract(doc);
    assert_eq!(result.monitoring_notes.len(), 2);
    assert!(result.monitoring_notes[0].starts_with("Variables require"));
    assert!(result.monitoring_notes[1].starts_with("v1.5 NOTE"));
}

#[test]
fn test_extract_file_missing_source() {
    let err = Extractor::new().extract_file("no/such/document.md").unwrap_err();
    assert!(matches!(err, crate::ExtractorError::SourceNotFound(_)));
}

#[test]
fn test_write_store_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("variables.yaml");

    let extractor = Extractor::new();
    let result = extractor.extract(FLOW_DOC);
    let metadata = ExtractionMetadata {
        version: "1.7".to_string(),
        date: "2026-02-24".to_string(),
        source: "APPENDIX_VARIABLES.md migration".to_string(),
    };
    extractor.write_store(&result, &metadata, &path).unwrap();

    let collection = dossier_store::Collection::load(&path).unwrap();
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.metadata()["version"], "1.7");
    assert_eq!(collection.entries()[2]["id"], "FV-03");
    assert_eq!(collection.entries()[2]["version_added"], "v1.3");
}
