// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header set construction and auth injection

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

use crate::descriptor::{Auth, RequestDescriptor};
use crate::error::{Error, Result};

/// Build the outbound header set
///
/// Header entries are applied in order with mapping semantics: a later
/// duplicate key overwrites an earlier one, case-insensitively. Auth is
/// injected afterwards and may overwrite an explicit Authorization header.
pub fn build_headers(descriptor: &RequestDescriptor) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for entry in &descriptor.headers {
        if !entry.is_active() {
            continue;
        }
        let name = HeaderName::try_from(entry.key.as_str())
            .map_err(|e| Error::config(format!("invalid header name '{}': {}", entry.key, e)))?;
        let value = HeaderValue::try_from(entry.value.as_deref().unwrap_or(""))
            .map_err(|e| Error::config(format!("invalid value for header '{}': {}", entry.key, e)))?;
        headers.insert(name, value);
    }
    apply_auth(&mut headers, &descriptor.auth)?;
    Ok(headers)
}

/// Inject the Authorization header for the configured auth scheme
///
/// A missing required credential (empty bearer token, empty basic username)
/// injects nothing.
fn apply_auth(headers: &mut HeaderMap, auth: &Auth) -> Result<()> {
    let value = match auth {
        Auth::Bearer { token } if !token.is_empty() => format!("Bearer {}", token),
        Auth::Basic { username, password } if !username.is_empty() => {
            let encoded = base64::Engine::encode(
                &base64::engine::general_purpose::STANDARD,
                format!("{}:{}", username, password),
            );
            format!("Basic {}", encoded)
        }
        _ => return Ok(()),
    };
    let value = HeaderValue::try_from(value)
        .map_err(|e| Error::config(format!("invalid authorization value: {}", e)))?;
    headers.insert(AUTHORIZATION, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{KeyValueEntry, Method};

    fn descriptor_with_headers(entries: Vec<KeyValueEntry>) -> RequestDescriptor {
        let mut descriptor = RequestDescriptor::new(Method::Get, "https://example.com");
        descriptor.headers = entries;
        descriptor
    }

    fn get(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }

    #[test]
    fn test_later_duplicate_wins_case_insensitively() {
        let headers = build_headers(&descriptor_with_headers(vec![
            KeyValueEntry::new("X-Trace", "first"),
            KeyValueEntry::new("x-trace", "second"),
        ]))
        .unwrap();
        assert_eq!(get(&headers, "x-trace"), Some("second".to_string()));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_missing_value_becomes_empty_string() {
        let headers = build_headers(&descriptor_with_headers(vec![KeyValueEntry {
            key: "X-Empty".to_string(),
            value: None,
            ..Default::default()
        }]))
        .unwrap();
        assert_eq!(get(&headers, "x-empty"), Some(String::new()));
    }

    #[test]
    fn test_bearer_injection() {
        let mut descriptor = descriptor_with_headers(vec![]);
        descriptor.auth = Auth::Bearer {
            token: "abc".to_string(),
        };
        let headers = build_headers(&descriptor).unwrap();
        assert_eq!(get(&headers, "authorization"), Some("Bearer abc".to_string()));
    }

    #[test]
    fn test_empty_bearer_token_injects_nothing() {
        let mut descriptor = descriptor_with_headers(vec![]);
        descriptor.auth = Auth::Bearer {
            token: String::new(),
        };
        let headers = build_headers(&descriptor).unwrap();
        assert!(headers.get("authorization").is_none());
    }

    #[test]
    fn test_basic_with_default_password() {
        let mut descriptor = descriptor_with_headers(vec![]);
        descriptor.auth = Auth::Basic {
            username: "u".to_string(),
            password: String::new(),
        };
        let headers = build_headers(&descriptor).unwrap();
        // base64("u:") == "dTo="
        assert_eq!(get(&headers, "authorization"), Some("Basic dTo=".to_string()));
    }

    #[test]
    fn test_auth_overwrites_explicit_authorization() {
        let mut descriptor =
            descriptor_with_headers(vec![KeyValueEntry::new("Authorization", "manual")]);
        descriptor.auth = Auth::Bearer {
            token: "abc".to_string(),
        };
        let headers = build_headers(&descriptor).unwrap();
        assert_eq!(get(&headers, "authorization"), Some("Bearer abc".to_string()));
    }

    #[test]
    fn test_invalid_header_name_is_config_error() {
        let result = build_headers(&descriptor_with_headers(vec![KeyValueEntry::new(
            "bad header",
            "v",
        )]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
