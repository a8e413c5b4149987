// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response normalization
//!
//! Raw bytes, status line and headers become the structured execution
//! result. Bytes are decoded as UTF-8 unconditionally (binary bodies are
//! treated as text by design); a JSON content type triggers a parse attempt
//! that falls back to the raw text, never an error.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde_json::Value;

use super::transport::RawResponse;
use crate::preview::RequestPreview;
use crate::result::{ExecutionResult, ResponseMetadata};

/// Assemble the execution result for one completed attempt
pub fn normalize(raw: &RawResponse, preview: RequestPreview, duration_ms: u64) -> ExecutionResult {
    let text = String::from_utf8_lossy(&raw.body).into_owned();
    let size = text.len();

    let response_body = if is_json_content_type(&raw.headers) {
        serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text.clone()))
    } else {
        Value::String(text.clone())
    };

    ExecutionResult {
        metadata: ResponseMetadata {
            status: raw.status,
            status_text: raw.status_text.clone(),
            duration_ms,
            size,
        },
        request_preview: preview,
        response_body,
        response_headers: flatten_headers(&raw.headers),
        raw_body: text,
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase().contains("json"))
        .unwrap_or(false)
}

/// Flatten the header map to name -> value; repeated names keep the last
/// value, inheriting whatever coalescing the transport already did
fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (name, value) in headers.iter() {
        map.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    map
}
