// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request building
//!
//! Pure functions that turn a validated descriptor into a concrete outbound
//! request: final URL with query parameters, header set with auth injected,
//! encoded body, and the redacted preview. Nothing here touches the network.

mod body;
mod headers;
mod url;

pub use body::{build_body, EncodedBody, RequestBody, MULTIPART_PREVIEW_LIMIT, RAW_PREVIEW_LIMIT};
pub use headers::build_headers;
pub use self::url::build_url;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::descriptor::RequestDescriptor;
use crate::error::Result;
use crate::preview::{build_preview, RequestPreview};

/// Concrete outbound request, ready for the transport
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: reqwest::Method,
    pub url: ::url::Url,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
    pub follow_redirects: bool,
}

/// Outbound request paired with its display preview
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub outbound: OutboundRequest,
    pub preview: RequestPreview,
}

/// Build everything derived from a descriptor, fresh per invocation
pub fn prepare(descriptor: &RequestDescriptor) -> Result<PreparedRequest> {
    let url = build_url(descriptor)?;
    let mut headers = build_headers(descriptor)?;
    let body = build_body(&descriptor.body)?;

    // The mode's implied content type applies only when the caller did not
    // set one explicitly.
    if let Some(content_type) = body.content_type {
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }

    let preview = build_preview(descriptor.method, &url, &headers, body.preview);

    Ok(PreparedRequest {
        outbound: OutboundRequest {
            method: descriptor.method.into(),
            url,
            headers,
            body: body.payload,
            follow_redirects: descriptor.follow_redirects,
        },
        preview,
    })
}
