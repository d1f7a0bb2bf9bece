//! Table output

use comfy_table::{presets::NOTHING, presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde_json::Value;

use crate::tikhub::{ItemResult, OperationSpec};

/// Longest summary shown in a results row
const SUMMARY_WIDTH: usize = 80;

/// One row per item: index, status, short summary of the payload
pub fn results_table(results: &[ItemResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Item", "Status", "Summary"]);

    for result in results {
        let (status, summary) = if result.failed {
            let message = result.json["error"]
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| result.json.to_string());
            ("error", message)
        } else {
            ("ok", summarize(&result.json))
        };
        table.add_row(vec![
            result.item_index.to_string(),
            status.to_string(),
            truncate(&summary, SUMMARY_WIDTH),
        ]);
    }

    table
}

/// Short description of an API payload
pub fn summarize(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("{} item(s)", items.len()),
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => format!("{} item(s)", items.len()),
            Some(Value::Object(data)) => {
                let keys: Vec<&str> = data.keys().map(String::as_str).collect();
                format!("data: {{{}}}", keys.join(", "))
            }
            Some(Value::Null) | None => value.to_string(),
            Some(other) => other.to_string(),
        },
        other => other.to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// The operation table shown by `tikhubctl ops`
pub fn operations_table<'a>(operations: impl IntoIterator<Item = &'a OperationSpec>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Resource",
            "Operation",
            "Method",
            "Parameters",
            "Cursor",
            "Description",
        ]);

    for op in operations {
        let params: Vec<String> = op.fields.iter().map(|f| f.describe()).collect();
        table.add_row(vec![
            op.resource.to_string(),
            op.name.to_string(),
            op.method.to_string(),
            params.join("\n"),
            op.cursor_field.unwrap_or("-").to_string(),
            op.description.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TikHubError;
    use crate::tikhub::{find_operation, Resource};
    use serde_json::json;

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(&json!([1, 2, 3])), "3 item(s)");
        assert_eq!(summarize(&json!({"data": [1]})), "1 item(s)");
        assert_eq!(
            summarize(&json!({"data": {"aweme_detail": {}, "status_code": 0}})),
            "data: {aweme_detail, status_code}"
        );
        assert_eq!(summarize(&json!({"code": 200})), r#"{"code":200}"#);
        assert_eq!(summarize(&json!("ok")), r#""ok""#);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn test_results_table() {
        let results = vec![
            ItemResult::success(json!({"data": [1, 2]}), 0),
            ItemResult::failure(&TikHubError::Validation("missing 'url'".to_string()), 1),
        ];
        let rendered = results_table(&results).to_string();
        assert!(rendered.contains("2 item(s)"));
        assert!(rendered.contains("error"));
        assert!(rendered.contains("missing 'url'"));
    }

    #[test]
    fn test_operations_table() {
        let op = find_operation(Resource::Tiktok, "get-video-comments").unwrap();
        let rendered = operations_table([op]).to_string();
        assert!(rendered.contains("get-video-comments"));
        assert!(rendered.contains("GET"));
        assert!(rendered.contains("aweme_id"));
    }
}
