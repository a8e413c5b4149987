// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Execution result types
//!
//! The normalized outcome of one invocation, produced exactly once per
//! attempt; only the final attempt's result reaches the caller. Serialized
//! camelCase for the JSON API.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::preview::RequestPreview;

/// Response status metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub status: u16,
    pub status_text: String,
    /// Wall-clock duration of the attempt
    pub duration_ms: u64,
    /// Byte size of the decoded response text
    pub size: usize,
}

impl ResponseMetadata {
    /// Whether the status classifies the attempt as a success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Normalized result of one executed HTTP call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub metadata: ResponseMetadata,
    pub request_preview: RequestPreview,
    /// Parsed JSON value, or the decoded text as a string
    pub response_body: Value,
    /// Header name to value; transport-side coalescing is inherited
    pub response_headers: BTreeMap<String, String>,
    /// Decoded response text, verbatim
    pub raw_body: String,
}
