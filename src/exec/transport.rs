// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport seam
//!
//! The executor talks to the network through [`Transport`], so tests can
//! substitute a scripted implementation. The production implementation is
//! reqwest over rustls.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::Client;

use crate::build::{OutboundRequest, RequestBody};
use crate::error::Result;

/// Maximum redirects followed when the descriptor allows redirects
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// User agent sent by the production transport
pub const USER_AGENT: &str = concat!("rekku/", env!("CARGO_PKG_VERSION"));

/// Raw response from one transport exchange, body fully collected
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// One socket-level HTTP exchange
///
/// Any conformant HTTP client satisfies this; the in-flight call is aborted
/// by dropping the returned future.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: &OutboundRequest) -> Result<RawResponse>;
}

/// Production transport backed by reqwest
///
/// Redirect policy is per-client in reqwest, so one client follows
/// redirects and one does not; both are immutable and cheap to share.
pub struct ReqwestTransport {
    following: Client,
    manual: Client,
}

impl ReqwestTransport {
    /// Create the production transport
    pub fn new() -> Result<Self> {
        Ok(Self {
            following: Self::client(Policy::limited(DEFAULT_MAX_REDIRECTS))?,
            manual: Self::client(Policy::none())?,
        })
    }

    fn client(redirect: Policy) -> Result<Client> {
        Ok(Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect)
            .build()?)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform(&self, request: &OutboundRequest) -> Result<RawResponse> {
        let client = if request.follow_redirects {
            &self.following
        } else {
            &self.manual
        };

        let mut builder = client.request(request.method.clone(), request.url.clone());
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        match &request.body {
            Some(RequestBody::Text(text)) => {
                builder = builder.body(text.clone());
            }
            Some(RequestBody::Multipart(fields)) => {
                let mut form = reqwest::multipart::Form::new();
                for (key, value) in fields {
                    form = form.text(key.clone(), value.clone());
                }
                builder = builder.multipart(form);
            }
            None => {}
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers,
            body,
        })
    }
}
