//! Record helpers exposed to the report renderer contract

use serde_json::Value;

/// Records whose `field` equals `value` (string comparison), in input order.
pub fn filter_by<'a>(records: &'a [Value], field: &str, value: &str) -> Vec<&'a Value> {
    records
        .iter()
        .filter(|r| r.get(field).and_then(Value::as_str) == Some(value))
        .collect()
}

/// Records sorted by `field`, optionally reversed.
///
/// Missing or non-string keys sort as the empty string; the sort is stable
/// so equal keys keep input order.
pub fn sort_by<'a>(records: &'a [Value], field: &str, reverse: bool) -> Vec<&'a Value> {
    let mut out: Vec<&Value> = records.iter().collect();
    out.sort_by_key(|r| {
        r.get(field)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    });
    if reverse {
        out.reverse();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Value> {
        vec![
            json!({"id": "FV-02", "table": "flow", "confidence": "Med"}),
            json!({"id": "SV-01", "table": "stock", "confidence": "High"}),
            json!({"id": "FV-01", "table": "flow"}),
        ]
    }

    #[test]
    fn test_filter_by_field_equality() {
        let rs = records();
        let flows = filter_by(&rs, "table", "flow");
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0]["id"], "FV-02");
    }

    #[test]
    fn test_filter_by_missing_field() {
        let rs = records();
        assert!(filter_by(&rs, "confidence", "Low").is_empty());
    }

    #[test]
    fn test_sort_by_and_reverse() {
        let rs = records();
        let sorted = sort_by(&rs, "id", false);
        assert_eq!(sorted[0]["id"], "FV-01");
        assert_eq!(sorted[2]["id"], "SV-01");

        let reversed = sort_by(&rs, "id", true);
        assert_eq!(reversed[0]["id"], "SV-01");
    }

    #[test]
    fn test_sort_missing_key_first() {
        let rs = records();
        // "FV-01" lacks a confidence field, so it sorts before the rest.
        let sorted = sort_by(&rs, "confidence", false);
        assert_eq!(sorted[0]["id"], "FV-01");
    }
}
