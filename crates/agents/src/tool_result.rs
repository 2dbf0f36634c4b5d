//! Tool result sanitization.
//!
//! Tool results follow the MCP-style shape `{ content: [ {type, ...}, ... ],
//! details?: {...} }`. Before a result is shown to the model, text items are
//! capped and encoded image payloads are dropped (the UI renders images
//! separately, and base64 in the context window only burns tokens).

use std::borrow::Cow;

use {
    courier_common::text::{truncate_utf16_safe, utf16_len},
    serde_json::{Map, Value},
    tracing::trace,
};

#[cfg(feature = "metrics")]
use courier_metrics::{counter, tool_results as tr_metrics};

/// Default cap on a single text content item, in UTF-16 code units.
pub const TOOL_RESULT_MAX_CHARS: usize = 8000;

/// Appended to text that was cut.
pub const TRUNCATION_MARKER: &str = "\n…(truncated)…";

/// Cap `text` at `max_chars` UTF-16 code units, appending [`TRUNCATION_MARKER`].
pub fn truncate_tool_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    // UTF-8 length is an upper bound on UTF-16 length.
    if text.len() <= max_chars || utf16_len(text) <= max_chars {
        return Cow::Borrowed(text);
    }
    let prefix = truncate_utf16_safe(text, max_chars);
    trace!(
        original_bytes = text.len(),
        kept_bytes = prefix.len(),
        "truncated tool result text"
    );
    #[cfg(feature = "metrics")]
    counter!(tr_metrics::TRUNCATED_TOTAL).increment(1);
    Cow::Owned(format!("{prefix}{TRUNCATION_MARKER}"))
}

/// Sanitize a tool result with the default [`TOOL_RESULT_MAX_CHARS`] limit.
pub fn sanitize_tool_result(result: &Value) -> Value {
    sanitize_tool_result_with_limit(result, TOOL_RESULT_MAX_CHARS)
}

/// Return a context-safe copy of `result`.
///
/// Only objects with an array-valued `content` are rewritten; anything else
/// is returned as-is. Within `content`:
/// - `text` items have `text` capped at `max_chars` UTF-16 code units;
/// - `image` items lose `data` and gain `bytes` (original data length) and
///   `omitted: true`;
/// - every other item is copied unchanged.
pub fn sanitize_tool_result_with_limit(result: &Value, max_chars: usize) -> Value {
    let Some(record) = result.as_object() else {
        return result.clone();
    };
    let Some(content) = record.get("content").and_then(Value::as_array) else {
        return result.clone();
    };

    let sanitized: Vec<Value> = content
        .iter()
        .map(|item| sanitize_content_item(item, max_chars))
        .collect();

    let mut out = Map::with_capacity(record.len());
    for (key, value) in record {
        if key == "content" {
            continue;
        }
        out.insert(key.clone(), value.clone());
    }
    out.insert("content".to_string(), Value::Array(sanitized));

    #[cfg(feature = "metrics")]
    counter!(tr_metrics::SANITIZED_TOTAL).increment(1);

    Value::Object(out)
}

fn sanitize_content_item(item: &Value, max_chars: usize) -> Value {
    let Some(entry) = item.as_object() else {
        return item.clone();
    };

    match entry.get("type").and_then(Value::as_str) {
        Some("text") => match entry.get("text").and_then(Value::as_str) {
            Some(text) => {
                let mut cleaned = entry.clone();
                let truncated = truncate_tool_text(text, max_chars).into_owned();
                cleaned.insert("text".to_string(), Value::String(truncated));
                Value::Object(cleaned)
            },
            None => item.clone(),
        },
        Some("image") => {
            let mut cleaned = entry.clone();
            let bytes = cleaned
                .remove("data")
                .as_ref()
                .and_then(Value::as_str)
                .map(utf16_len)
                .filter(|len| *len > 0);
            match bytes {
                Some(len) => {
                    cleaned.insert("bytes".to_string(), Value::from(len));
                },
                None => {
                    cleaned.remove("bytes");
                },
            }
            cleaned.insert("omitted".to_string(), Value::Bool(true));

            #[cfg(feature = "metrics")]
            counter!(tr_metrics::IMAGES_OMITTED_TOTAL).increment(1);

            Value::Object(cleaned)
        },
        _ => item.clone(),
    }
}

/// Whether a tool result reports failure via `details.status`.
///
/// `"error"` and `"timeout"` count, compared after trimming and lowercasing.
/// A missing or non-object `details`, or a non-string status, is not an error.
pub fn is_tool_result_error(result: &Value) -> bool {
    let is_error = result
        .get("details")
        .filter(|details| details.is_object())
        .and_then(|details| details.get("status"))
        .and_then(Value::as_str)
        .is_some_and(|status| {
            matches!(status.trim().to_lowercase().as_str(), "error" | "timeout")
        });

    #[cfg(feature = "metrics")]
    {
        if is_error {
            counter!(tr_metrics::ERRORS_TOTAL).increment(1);
        }
    }

    is_error
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn marker_len() -> usize {
        utf16_len(TRUNCATION_MARKER)
    }

    // ── Truncation ───────────────────────────────────────────────────────

    #[test]
    fn text_at_limit_is_unchanged() {
        let text = "a".repeat(TOOL_RESULT_MAX_CHARS);
        assert!(matches!(
            truncate_tool_text(&text, TOOL_RESULT_MAX_CHARS),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn long_text_is_cut_and_marked() {
        let text = "a".repeat(TOOL_RESULT_MAX_CHARS + 500);
        let out = truncate_tool_text(&text, TOOL_RESULT_MAX_CHARS);
        assert!(out.ends_with(TRUNCATION_MARKER));
        assert_eq!(utf16_len(&out), TOOL_RESULT_MAX_CHARS + marker_len());
    }

    #[test]
    fn multibyte_text_under_limit_is_unchanged() {
        // 3000 CJK chars: 9000 UTF-8 bytes but only 3000 UTF-16 units.
        let text = "語".repeat(3000);
        assert_eq!(truncate_tool_text(&text, 8000), text.as_str());
    }

    #[test]
    fn emoji_straddling_the_cut_is_dropped() {
        // 7999 ASCII units then a surrogate pair occupying units 7999..8001.
        let text = format!("{}😀tail", "a".repeat(7999));
        let out = truncate_tool_text(&text, 8000);
        let prefix = out.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(prefix, "a".repeat(7999));
        assert!(utf16_len(&out) <= 8000 + marker_len());
    }

    #[test]
    fn all_emoji_input_stays_bounded() {
        let text = "😀".repeat(5000);
        let out = truncate_tool_text(&text, 8000);
        assert!(out.ends_with(TRUNCATION_MARKER));
        let prefix = out.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(utf16_len(prefix), 8000);
        assert!(prefix.chars().all(|c| c == '😀'));
    }

    #[test]
    fn odd_limit_with_emoji_rounds_down() {
        let text = "😀".repeat(10);
        let out = truncate_tool_text(&text, 5);
        assert_eq!(out, format!("😀😀{TRUNCATION_MARKER}"));
    }

    // ── Sanitization ─────────────────────────────────────────────────────

    #[test]
    fn non_objects_pass_through() {
        for value in [json!(null), json!("plain"), json!(42), json!([1, 2])] {
            assert_eq!(sanitize_tool_result(&value), value);
        }
    }

    #[test]
    fn results_without_content_array_pass_through() {
        let result = json!({ "ok": true, "content": "not an array" });
        assert_eq!(sanitize_tool_result(&result), result);
        let result = json!({ "details": { "status": "ok" } });
        assert_eq!(sanitize_tool_result(&result), result);
    }

    #[test]
    fn text_items_are_truncated_and_keep_other_fields() {
        let long = "x".repeat(9000);
        let result = json!({
            "content": [{ "type": "text", "text": long, "annotations": { "audience": ["user"] } }],
            "details": { "status": "ok" },
        });
        let out = sanitize_tool_result(&result);
        let item = &out["content"][0];
        let text = item["text"].as_str().unwrap();
        assert!(text.ends_with(TRUNCATION_MARKER));
        assert_eq!(utf16_len(text), 8000 + marker_len());
        assert_eq!(item["annotations"], json!({ "audience": ["user"] }));
        assert_eq!(out["details"], json!({ "status": "ok" }));
    }

    #[test]
    fn short_text_items_are_unchanged() {
        let result = json!({ "content": [{ "type": "text", "text": "done" }] });
        assert_eq!(sanitize_tool_result(&result), result);
    }

    #[test]
    fn image_data_is_replaced_by_byte_count() {
        let result = json!({
            "content": [{ "type": "image", "data": "aGVsbG8=", "mimeType": "image/png" }],
        });
        let out = sanitize_tool_result(&result);
        assert_eq!(
            out["content"][0],
            json!({ "type": "image", "mimeType": "image/png", "bytes": 8, "omitted": true })
        );
    }

    #[test]
    fn image_without_data_has_no_byte_count() {
        let result = json!({
            "content": [
                { "type": "image", "mimeType": "image/png", "bytes": 999 },
                { "type": "image", "data": "" },
                { "type": "image", "data": 17 },
            ],
        });
        let out = sanitize_tool_result(&result);
        for item in out["content"].as_array().unwrap() {
            assert!(item.get("data").is_none());
            assert!(item.get("bytes").is_none());
            assert_eq!(item["omitted"], json!(true));
        }
    }

    #[test]
    fn other_items_pass_through() {
        let result = json!({
            "content": [
                "bare string",
                7,
                { "type": "resource", "uri": "file:///tmp/x" },
                { "type": "text", "text": 12 },
                { "text": "untyped" },
            ],
        });
        assert_eq!(sanitize_tool_result(&result), result);
    }

    #[test]
    fn input_is_not_mutated() {
        let result = json!({ "content": [{ "type": "image", "data": "AAAA" }] });
        let before = result.clone();
        let _ = sanitize_tool_result(&result);
        assert_eq!(result, before);
    }

    #[test]
    fn custom_limit_is_respected() {
        let result = json!({ "content": [{ "type": "text", "text": "abcdefgh" }] });
        let out = sanitize_tool_result_with_limit(&result, 3);
        assert_eq!(
            out["content"][0]["text"],
            json!(format!("abc{TRUNCATION_MARKER}"))
        );
    }

    // ── Error classification ────────────────────────────────────────────

    #[test]
    fn error_and_timeout_statuses_are_errors() {
        for status in ["error", "timeout", " ERROR ", "Timeout\n"] {
            let result = json!({ "details": { "status": status } });
            assert!(is_tool_result_error(&result), "{status:?}");
        }
    }

    #[test]
    fn other_statuses_are_not_errors() {
        for status in ["", "ok", "errors", "time out", "failed"] {
            let result = json!({ "details": { "status": status } });
            assert!(!is_tool_result_error(&result), "{status:?}");
        }
    }

    #[test]
    fn malformed_details_are_not_errors() {
        assert!(!is_tool_result_error(&json!(null)));
        assert!(!is_tool_result_error(&json!("error")));
        assert!(!is_tool_result_error(&json!({})));
        assert!(!is_tool_result_error(&json!({ "details": "error" })));
        assert!(!is_tool_result_error(&json!({ "details": { "status": 500 } })));
        assert!(!is_tool_result_error(&json!({ "status": "error" })));
    }
}
