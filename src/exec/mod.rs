// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request execution
//!
//! The retrying executor, the transport seam it drives, and the response
//! normalizer that shapes raw responses into execution results.

mod executor;
mod normalize;
mod transport;

pub use executor::{execute_http, retry_delay, EXPONENTIAL_RETRY_BASE, LINEAR_RETRY_DELAY};
pub use normalize::normalize;
pub use transport::{
    RawResponse, ReqwestTransport, Transport, DEFAULT_MAX_REDIRECTS, USER_AGENT,
};
