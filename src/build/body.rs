// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body encoding per mode
//!
//! Each mode yields the wire payload plus a display-only preview value. The
//! two deliberately diverge: the json preview is the parsed value while the
//! wire carries the original trimmed text, and multipart/raw previews are
//! truncated while the wire never is.

use serde_json::Value;
use url::form_urlencoded;

use crate::descriptor::BodySpec;
use crate::error::{Error, Result};

/// Preview length limit for multipart field values
pub const MULTIPART_PREVIEW_LIMIT: usize = 120;
/// Preview length limit for raw bodies
pub const RAW_PREVIEW_LIMIT: usize = 200;

/// Marker appended to truncated preview values
const ELLIPSIS: &str = "...";

/// Wire payload of an outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Verbatim text payload
    Text(String),
    /// Multipart form fields; the transport performs the actual encoding
    Multipart(Vec<(String, String)>),
}

/// Encoded body: wire payload, implied content type, preview value
#[derive(Debug, Clone, Default)]
pub struct EncodedBody {
    pub payload: Option<RequestBody>,
    /// Content type the mode implies; not forced over an explicit header
    pub content_type: Option<&'static str>,
    pub preview: Option<Value>,
}

/// Encode a body spec into its wire and preview forms
pub fn build_body(spec: &BodySpec) -> Result<EncodedBody> {
    match spec {
        BodySpec::None => Ok(EncodedBody::default()),

        BodySpec::Json(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(EncodedBody::default());
            }
            let parsed: Value = serde_json::from_str(trimmed)
                .map_err(|e| Error::invalid_body(format!("invalid JSON body: {}", e)))?;
            Ok(EncodedBody {
                // The wire body is the trimmed original text, not a
                // re-serialization of the parsed value.
                payload: Some(RequestBody::Text(trimmed.to_string())),
                content_type: Some("application/json"),
                preview: Some(parsed),
            })
        }

        BodySpec::Form(entries) => {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            let mut preview = serde_json::Map::new();
            for entry in entries.iter().filter(|e| e.is_active()) {
                let value = entry.value.clone().unwrap_or_default();
                serializer.append_pair(&entry.key, &value);
                // Mapping semantics in the preview: last value per key wins.
                preview.insert(entry.key.clone(), Value::String(value));
            }
            Ok(EncodedBody {
                payload: Some(RequestBody::Text(serializer.finish())),
                content_type: Some("application/x-www-form-urlencoded"),
                preview: Some(Value::Object(preview)),
            })
        }

        BodySpec::Multipart(entries) => {
            let mut fields = Vec::new();
            let mut preview = serde_json::Map::new();
            for entry in entries.iter().filter(|e| e.is_active()) {
                let value = entry.value.clone().unwrap_or_default();
                preview.insert(
                    entry.key.clone(),
                    Value::String(truncate(&value, MULTIPART_PREVIEW_LIMIT)),
                );
                fields.push((entry.key.clone(), value));
            }
            Ok(EncodedBody {
                payload: Some(RequestBody::Multipart(fields)),
                // The transport sets the boundary-bearing content type.
                content_type: None,
                preview: Some(Value::Object(preview)),
            })
        }

        BodySpec::Raw(raw) => Ok(EncodedBody {
            payload: Some(RequestBody::Text(raw.clone())),
            content_type: None,
            preview: Some(Value::String(truncate(raw, RAW_PREVIEW_LIMIT))),
        }),
    }
}

/// Truncate for display, appending the ellipsis marker when shortened
fn truncate(s: &str, limit: usize) -> String {
    let mut chars = s.char_indices();
    match chars.nth(limit) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}{}", &s[..cut], ELLIPSIS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::KeyValueEntry;
    use serde_json::json;

    #[test]
    fn test_json_preserves_original_text() {
        let encoded = build_body(&BodySpec::Json("  {\"a\": 1}  ".to_string())).unwrap();
        assert_eq!(
            encoded.payload,
            Some(RequestBody::Text("{\"a\": 1}".to_string()))
        );
        assert_eq!(encoded.preview, Some(json!({"a": 1})));
        assert_eq!(encoded.content_type, Some("application/json"));
    }

    #[test]
    fn test_empty_json_means_no_body() {
        let encoded = build_body(&BodySpec::Json("   ".to_string())).unwrap();
        assert!(encoded.payload.is_none());
        assert!(encoded.preview.is_none());
    }

    #[test]
    fn test_invalid_json_carries_parser_reason() {
        let err = build_body(&BodySpec::Json("{bad".to_string())).unwrap_err();
        let Error::InvalidBody(message) = err else {
            panic!("expected invalid body error");
        };
        assert!(message.contains("invalid JSON body"));
        // The parser's own reason must survive.
        assert!(message.len() > "invalid JSON body: ".len());
    }

    #[test]
    fn test_form_wire_keeps_repeats_preview_maps() {
        let encoded = build_body(&BodySpec::Form(vec![
            KeyValueEntry::new("a", "1"),
            KeyValueEntry::new("a", "2"),
            KeyValueEntry::new("b", "x y"),
            KeyValueEntry::new("", "dropped"),
        ]))
        .unwrap();

        assert_eq!(
            encoded.payload,
            Some(RequestBody::Text("a=1&a=2&b=x+y".to_string()))
        );
        assert_eq!(encoded.preview, Some(json!({"a": "2", "b": "x y"})));
        assert_eq!(
            encoded.content_type,
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_multipart_preview_truncates_wire_does_not() {
        let long = "v".repeat(150);
        let encoded = build_body(&BodySpec::Multipart(vec![KeyValueEntry::new(
            "field",
            long.clone(),
        )]))
        .unwrap();

        let Some(RequestBody::Multipart(fields)) = &encoded.payload else {
            panic!("expected multipart payload");
        };
        assert_eq!(fields[0].1, long);

        let preview = encoded.preview.unwrap();
        let shown = preview["field"].as_str().unwrap();
        assert_eq!(shown.len(), MULTIPART_PREVIEW_LIMIT + ELLIPSIS.len());
        assert!(shown.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_raw_preview_truncates_at_200() {
        let long = "x".repeat(250);
        let encoded = build_body(&BodySpec::Raw(long.clone())).unwrap();

        assert_eq!(encoded.payload, Some(RequestBody::Text(long)));
        let preview = encoded.preview.unwrap();
        let shown = preview.as_str().unwrap();
        assert_eq!(shown.len(), RAW_PREVIEW_LIMIT + ELLIPSIS.len());
        assert!(shown.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_short_raw_body_untouched() {
        let encoded = build_body(&BodySpec::Raw("short".to_string())).unwrap();
        assert_eq!(encoded.preview, Some(Value::String("short".to_string())));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let s = "ä".repeat(130);
        let shown = truncate(&s, MULTIPART_PREVIEW_LIMIT);
        assert!(shown.ends_with(ELLIPSIS));
        assert_eq!(shown.chars().count(), MULTIPART_PREVIEW_LIMIT + ELLIPSIS.len());
    }
}
