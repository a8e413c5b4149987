// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Redacted request preview
//!
//! A display-only rendition of the outbound request: a curl-style one-liner
//! plus the header map with sensitive values masked. Never sent over the
//! wire and never affects execution.

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;

use crate::descriptor::Method;

/// Fixed mask substituted for sensitive header values
pub const REDACTED_MASK: &str = "***REDACTED***";

/// Header name fragments that trigger redaction (matched case-insensitively)
const SENSITIVE_NAME_PARTS: [&str; 3] = ["authorization", "token", "secret"];

/// Redacted, human-readable rendition of an outbound request
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestPreview {
    /// Single-line curl-equivalent command, built from redacted headers
    pub curl: String,
    /// Header map with sensitive values masked
    pub headers: BTreeMap<String, String>,
    /// Structured body preview (unredacted), for UI rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Build the preview for a fully constructed request
pub fn build_preview(
    method: Method,
    url: &url::Url,
    headers: &HeaderMap,
    body: Option<Value>,
) -> RequestPreview {
    let redacted = redact_headers(headers);
    let curl = curl_line(method, url, &redacted, body.as_ref());
    RequestPreview {
        curl,
        headers: redacted,
        body,
    }
}

/// Whether a header name is considered sensitive
pub fn is_sensitive_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SENSITIVE_NAME_PARTS.iter().any(|part| lower.contains(part))
}

fn redact_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (name, value) in headers.iter() {
        let rendered = if is_sensitive_name(name.as_str()) {
            REDACTED_MASK.to_string()
        } else {
            String::from_utf8_lossy(value.as_bytes()).into_owned()
        };
        map.insert(name.as_str().to_string(), rendered);
    }
    map
}

fn curl_line(
    method: Method,
    url: &url::Url,
    headers: &BTreeMap<String, String>,
    body: Option<&Value>,
) -> String {
    let mut line = format!("curl -X {} '{}'", method.as_str(), url);
    for (name, value) in headers {
        line.push_str(&format!(" -H '{}: {}'", name, value));
    }
    if let Some(body) = body {
        let rendered = match body {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        line.push_str(&format!(" --data '{}'", rendered));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::try_from(*name).unwrap(),
                HeaderValue::try_from(*value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_authorization_is_masked() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let preview = build_preview(
            Method::Get,
            &url,
            &headers(&[("authorization", "Bearer abc"), ("accept", "text/plain")]),
            None,
        );

        assert_eq!(preview.headers["authorization"], REDACTED_MASK);
        assert_eq!(preview.headers["accept"], "text/plain");
        assert!(!preview.curl.contains("Bearer abc"));
        assert!(preview.curl.contains(REDACTED_MASK));
    }

    #[test]
    fn test_sensitive_name_fragments() {
        assert!(is_sensitive_name("Authorization"));
        assert!(is_sensitive_name("X-Api-Token"));
        assert!(is_sensitive_name("X-Client-Secret"));
        assert!(!is_sensitive_name("content-type"));
    }

    #[test]
    fn test_curl_line_shape() {
        let url = url::Url::parse("https://example.com/things?a=1").unwrap();
        let preview = build_preview(
            Method::Post,
            &url,
            &headers(&[("content-type", "application/json")]),
            Some(json!({"a": 1})),
        );

        assert_eq!(
            preview.curl,
            "curl -X POST 'https://example.com/things?a=1' \
             -H 'content-type: application/json' --data '{\"a\":1}'"
        );
    }

    #[test]
    fn test_string_body_rendered_verbatim() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let preview = build_preview(
            Method::Put,
            &url,
            &HeaderMap::new(),
            Some(Value::String("plain text".to_string())),
        );
        assert!(preview.curl.ends_with("--data 'plain text'"));
    }

    #[test]
    fn test_structured_body_preview_is_unredacted() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let body = json!({"password": "hunter2"});
        let preview = build_preview(Method::Post, &url, &HeaderMap::new(), Some(body.clone()));
        // Redaction applies to headers only; the body preview is structured
        // data for the UI to render.
        assert_eq!(preview.body, Some(body));
    }
}
