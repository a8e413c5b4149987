// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Final URL construction

use url::Url;

use crate::descriptor::RequestDescriptor;
use crate::error::Result;

/// Build the final URL: parse the base and append query entries
///
/// Repeated keys produce repeated parameters (multi-value semantics).
/// Entries with an empty key or no value are skipped. A malformed base URL
/// fails with a config error.
pub fn build_url(descriptor: &RequestDescriptor) -> Result<Url> {
    let mut url = Url::parse(&descriptor.url)?;
    {
        let mut pairs = url.query_pairs_mut();
        for entry in &descriptor.query_params {
            if !entry.is_active() {
                continue;
            }
            if let Some(value) = &entry.value {
                pairs.append_pair(&entry.key, value);
            }
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{KeyValueEntry, Method};
    use crate::error::Error;

    #[test]
    fn test_repeated_keys_both_appear() {
        let mut descriptor = RequestDescriptor::new(Method::Get, "https://x.test/");
        descriptor.query_params = vec![
            KeyValueEntry::new("a", "1"),
            KeyValueEntry::new("a", "2"),
        ];
        let url = build_url(&descriptor).unwrap();
        assert_eq!(url.query(), Some("a=1&a=2"));
    }

    #[test]
    fn test_inactive_entries_skipped() {
        let mut descriptor = RequestDescriptor::new(Method::Get, "https://x.test/");
        descriptor.query_params = vec![
            KeyValueEntry::new("", "dropped"),
            KeyValueEntry {
                key: "novalue".to_string(),
                value: None,
                ..Default::default()
            },
            KeyValueEntry::new("kept", "yes"),
        ];
        let url = build_url(&descriptor).unwrap();
        assert_eq!(url.query(), Some("kept=yes"));
    }

    #[test]
    fn test_preserves_existing_query() {
        let mut descriptor = RequestDescriptor::new(Method::Get, "https://x.test/?fixed=1");
        descriptor.query_params = vec![KeyValueEntry::new("added", "2")];
        let url = build_url(&descriptor).unwrap();
        assert_eq!(url.query(), Some("fixed=1&added=2"));
    }

    #[test]
    fn test_values_are_encoded() {
        let mut descriptor = RequestDescriptor::new(Method::Get, "https://x.test/");
        descriptor.query_params = vec![KeyValueEntry::new("q", "a b&c")];
        let url = build_url(&descriptor).unwrap();
        assert_eq!(url.query(), Some("q=a+b%26c"));
    }

    #[test]
    fn test_malformed_base_is_config_error() {
        let descriptor = RequestDescriptor::new(Method::Get, "not a url");
        assert!(matches!(build_url(&descriptor), Err(Error::Config(_))));
    }
}
