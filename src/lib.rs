// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # rekku - HTTP Request Execution Engine
//!
//! The backend primitive of an interactive API client: a declarative
//! descriptor in, a normalized execution result out.
//!
//! ## Features
//!
//! - Descriptor validation: every field violation reported, not just the first
//! - Request building: multi-value query params, mapping-semantics headers,
//!   bearer/basic auth injection
//! - Body modes: json (validated, sent verbatim), form, multipart, raw
//! - Redacted preview: curl-equivalent one-liner with sensitive headers masked
//! - Retrying executor: per-attempt timeout, linear/exponential backoff,
//!   status failures that still carry the full response
//! - Response normalization: content-type-aware JSON parsing with text fallback
//!
//! ## Example
//!
//! ```rust,no_run
//! use rekku::exec::{execute_http, ReqwestTransport};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let descriptor = rekku::descriptor::validate(&json!({
//!         "method": "GET",
//!         "url": "https://httpbin.org/get",
//!         "queryParams": [{"key": "page", "value": "1"}],
//!         "retryCount": 2,
//!     }))?;
//!
//!     let transport = ReqwestTransport::new()?;
//!     let result = execute_http(&descriptor, &transport).await?;
//!
//!     println!("{} in {}ms", result.metadata.status, result.metadata.duration_ms);
//!     println!("{}", result.request_preview.curl);
//!     Ok(())
//! }
//! ```

pub mod build;
pub mod descriptor;
pub mod error;
pub mod exec;
pub mod preview;
pub mod result;
pub mod server;

// Re-exports for convenience

// Descriptor model
pub use descriptor::{
    validate, Auth, Backoff, BodySpec, FieldViolation, KeyValueEntry, Method, RequestDescriptor,
    ValidationReport,
};

// Request building
pub use build::{prepare, OutboundRequest, PreparedRequest, RequestBody};

// Preview
pub use preview::{RequestPreview, REDACTED_MASK};

// Execution
pub use exec::{execute_http, RawResponse, ReqwestTransport, Transport};

// Results
pub use result::{ExecutionResult, ResponseMetadata};

// Errors
pub use error::{Error, Result};

/// rekku version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
