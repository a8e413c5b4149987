// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request descriptor types
//!
//! The validated, immutable description of one HTTP call. Everything derived
//! from a descriptor (final URL, header set, encoded body) is computed fresh
//! per execution and never written back.

use std::time::Duration;

/// Minimum accepted per-attempt timeout in milliseconds
pub const TIMEOUT_MIN_MS: i64 = 100;
/// Maximum accepted per-attempt timeout in milliseconds
pub const TIMEOUT_MAX_MS: i64 = 60_000;
/// Default per-attempt timeout in milliseconds
pub const TIMEOUT_DEFAULT_MS: i64 = 15_000;
/// Maximum accepted retry count
pub const RETRY_COUNT_MAX: i64 = 5;

/// HTTP methods supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Parse a method name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "PATCH" => Some(Method::Patch),
            "DELETE" => Some(Method::Delete),
            _ => None,
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One key-value entry, used uniformly for query params, headers, form
/// fields and multipart fields
///
/// Entries with an empty key are carried through validation but ignored by
/// every builder (never sent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: Option<String>,
    /// Marked sensitive by the frontend; carried for completeness
    pub sensitive: bool,
    /// Field kind hint (wire name `type`); only string fields exist here
    pub kind: Option<String>,
}

impl KeyValueEntry {
    /// Create an entry with a key and value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            sensitive: false,
            kind: None,
        }
    }

    /// Whether builders should emit this entry
    pub fn is_active(&self) -> bool {
        !self.key.is_empty()
    }
}

/// Delay growth rule between retry attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backoff {
    /// Constant step
    Linear,
    /// Doubling delay from a larger base
    #[default]
    Exponential,
}

/// Authentication applied to the outbound request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Auth {
    #[default]
    None,
    Bearer {
        token: String,
    },
    Basic {
        username: String,
        password: String,
    },
}

/// Request body, dispatched by mode
///
/// Built by the validator from the flat wire fields (`bodyMode`,
/// `jsonBody`, `formBody`, `multipartBody`, `rawBody`) into a closed set so
/// encoding is exhaustively matched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BodySpec {
    #[default]
    None,
    /// Raw JSON text, validated but sent as-is (not re-serialized)
    Json(String),
    /// URL-encoded form fields
    Form(Vec<KeyValueEntry>),
    /// Multipart form fields (string-typed)
    Multipart(Vec<KeyValueEntry>),
    /// Verbatim string body
    Raw(String),
}

/// Validated, immutable description of one HTTP call
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub query_params: Vec<KeyValueEntry>,
    pub headers: Vec<KeyValueEntry>,
    pub body: BodySpec,
    pub auth: Auth,
    /// Per-attempt timeout
    pub timeout: Duration,
    /// Additional attempts after the first failure, 0..=5
    pub retry_count: u32,
    pub backoff: Backoff,
    pub follow_redirects: bool,
}

impl RequestDescriptor {
    /// Create a descriptor with all defaults applied
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query_params: Vec::new(),
            headers: Vec::new(),
            body: BodySpec::None,
            auth: Auth::None,
            timeout: Duration::from_millis(TIMEOUT_DEFAULT_MS as u64),
            retry_count: 0,
            backoff: Backoff::default(),
            follow_redirects: true,
        }
    }
}
