// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Descriptor validation
//!
//! Turns an arbitrary JSON value into a normalized [`RequestDescriptor`],
//! applying defaults and collecting every field violation rather than
//! stopping at the first. Execution must not proceed when validation fails.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

use super::types::{
    Auth, Backoff, BodySpec, KeyValueEntry, Method, RequestDescriptor, RETRY_COUNT_MAX,
    TIMEOUT_DEFAULT_MS, TIMEOUT_MAX_MS, TIMEOUT_MIN_MS,
};
use crate::error::{Error, Result};

/// One field violation, indexed by its path in the input document
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
}

/// Complete validation report, one entry per violated field
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            if violation.path.is_empty() {
                write!(f, "{}", violation.message)?;
            } else {
                write!(f, "{}: {}", violation.path, violation.message)?;
            }
        }
        Ok(())
    }
}

/// Validate and normalize an untyped input value into a descriptor
///
/// Defaults are applied here (`authType` none, arrays empty, timeout
/// 15000ms, retry count 0, exponential backoff, redirects followed). An
/// unrecognized `bodyMode` normalizes to "no body"; unrecognized `method`,
/// `authType` and `retryBackoff` values are violations.
pub fn validate(input: &Value) -> Result<RequestDescriptor> {
    let mut report = ValidationReport::default();

    let Some(obj) = input.as_object() else {
        report.push("", "expected a JSON object");
        return Err(Error::Validation { report });
    };

    let method = method_field(obj, &mut report);
    let url = url_field(obj, &mut report);
    let query_params = entries_field(obj, "queryParams", &mut report);
    let headers = entries_field(obj, "headers", &mut report);
    let body = body_field(obj, &mut report);
    let auth = auth_field(obj, &mut report);
    let timeout_ms = int_field(
        obj,
        "timeoutMs",
        TIMEOUT_MIN_MS,
        TIMEOUT_MAX_MS,
        TIMEOUT_DEFAULT_MS,
        &mut report,
    );
    let retry_count = int_field(obj, "retryCount", 0, RETRY_COUNT_MAX, 0, &mut report);
    let backoff = backoff_field(obj, &mut report);
    let follow_redirects = bool_field(obj, "followRedirects", true, &mut report);

    if report.is_empty() {
        if let (Some(method), Some(url)) = (method, url) {
            return Ok(RequestDescriptor {
                method,
                url,
                query_params,
                headers,
                body,
                auth,
                timeout: Duration::from_millis(timeout_ms as u64),
                retry_count: retry_count as u32,
                backoff,
                follow_redirects,
            });
        }
    }

    Err(Error::Validation { report })
}

fn method_field(obj: &Map<String, Value>, report: &mut ValidationReport) -> Option<Method> {
    match obj.get("method") {
        Some(Value::String(s)) => match Method::parse(s) {
            Some(method) => Some(method),
            None => {
                report.push("method", format!("unknown method '{}'", s));
                None
            }
        },
        Some(_) => {
            report.push("method", "expected a string");
            None
        }
        None => {
            report.push("method", "is required");
            None
        }
    }
}

fn url_field(obj: &Map<String, Value>, report: &mut ValidationReport) -> Option<String> {
    match obj.get("url") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            report.push("url", "must not be empty");
            None
        }
        Some(_) => {
            report.push("url", "expected a string");
            None
        }
        None => {
            report.push("url", "is required");
            None
        }
    }
}

fn entries_field(
    obj: &Map<String, Value>,
    field: &str,
    report: &mut ValidationReport,
) -> Vec<KeyValueEntry> {
    match obj.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| entry_at(item, &format!("{}[{}]", field, i), report))
            .collect(),
        Some(_) => {
            report.push(field, "expected an array");
            Vec::new()
        }
    }
}

fn entry_at(value: &Value, path: &str, report: &mut ValidationReport) -> Option<KeyValueEntry> {
    let Some(obj) = value.as_object() else {
        report.push(path, "expected an object");
        return None;
    };

    let key = match obj.get("key") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(_) => {
            report.push(format!("{}.key", path), "expected a string");
            return None;
        }
    };
    let value = match obj.get("value") {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => None,
        Some(_) => {
            report.push(format!("{}.value", path), "expected a string");
            return None;
        }
    };
    let sensitive = match obj.get("sensitive") {
        Some(Value::Bool(b)) => *b,
        None | Some(Value::Null) => false,
        Some(_) => {
            report.push(format!("{}.sensitive", path), "expected a boolean");
            return None;
        }
    };
    let kind = match obj.get("type") {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => None,
        Some(_) => {
            report.push(format!("{}.type", path), "expected a string");
            return None;
        }
    };

    Some(KeyValueEntry {
        key,
        value,
        sensitive,
        kind,
    })
}

fn body_field(obj: &Map<String, Value>, report: &mut ValidationReport) -> BodySpec {
    let mode = match obj.get("bodyMode") {
        Some(Value::String(s)) => Some(s.as_str()),
        None | Some(Value::Null) => None,
        Some(_) => {
            report.push("bodyMode", "expected a string");
            None
        }
    };

    match mode {
        Some("json") => BodySpec::Json(string_field(obj, "jsonBody", report).unwrap_or_default()),
        Some("form") => BodySpec::Form(entries_field(obj, "formBody", report)),
        Some("multipart") => BodySpec::Multipart(entries_field(obj, "multipartBody", report)),
        Some("raw") => BodySpec::Raw(string_field(obj, "rawBody", report).unwrap_or_default()),
        // Absent or unrecognized mode: no body
        _ => BodySpec::None,
    }
}

fn auth_field(obj: &Map<String, Value>, report: &mut ValidationReport) -> Auth {
    let auth_type = match obj.get("authType") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => "none".to_string(),
        Some(_) => {
            report.push("authType", "expected a string");
            return Auth::None;
        }
    };

    match auth_type.as_str() {
        "none" => Auth::None,
        "bearer" => Auth::Bearer {
            token: string_field(obj, "bearerToken", report).unwrap_or_default(),
        },
        "basic" => Auth::Basic {
            username: string_field(obj, "basicUsername", report).unwrap_or_default(),
            password: string_field(obj, "basicPassword", report).unwrap_or_default(),
        },
        other => {
            report.push("authType", format!("unknown auth type '{}'", other));
            Auth::None
        }
    }
}

fn backoff_field(obj: &Map<String, Value>, report: &mut ValidationReport) -> Backoff {
    match obj.get("retryBackoff") {
        Some(Value::String(s)) => match s.as_str() {
            "linear" => Backoff::Linear,
            "exponential" => Backoff::Exponential,
            other => {
                report.push("retryBackoff", format!("unknown backoff '{}'", other));
                Backoff::default()
            }
        },
        None | Some(Value::Null) => Backoff::default(),
        Some(_) => {
            report.push("retryBackoff", "expected a string");
            Backoff::default()
        }
    }
}

fn string_field(
    obj: &Map<String, Value>,
    field: &str,
    report: &mut ValidationReport,
) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => None,
        Some(_) => {
            report.push(field, "expected a string");
            None
        }
    }
}

fn int_field(
    obj: &Map<String, Value>,
    field: &str,
    min: i64,
    max: i64,
    default: i64,
    report: &mut ValidationReport,
) -> i64 {
    match obj.get(field) {
        None | Some(Value::Null) => default,
        Some(value) => match value.as_i64() {
            Some(n) if (min..=max).contains(&n) => n,
            Some(_) => {
                report.push(field, format!("must be between {} and {}", min, max));
                default
            }
            None => {
                report.push(field, "expected an integer");
                default
            }
        },
    }
}

fn bool_field(
    obj: &Map<String, Value>,
    field: &str,
    default: bool,
    report: &mut ValidationReport,
) -> bool {
    match obj.get(field) {
        Some(Value::Bool(b)) => *b,
        None | Some(Value::Null) => default,
        Some(_) => {
            report.push(field, "expected a boolean");
            default
        }
    }
}
