// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Retrying executor
//!
//! Wraps a single transport attempt with a timeout and an optional bounded
//! retry loop. Each attempt is classified the same way: 2xx succeeds,
//! anything else fails with the full result attached, transport failures
//! fail with a message only. The last failure is surfaced as-is.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::normalize::normalize;
use super::transport::Transport;
use crate::build::{prepare, PreparedRequest};
use crate::descriptor::{Backoff, RequestDescriptor};
use crate::error::{Error, Result};
use crate::result::ExecutionResult;

/// Constant inter-retry delay for linear backoff
pub const LINEAR_RETRY_DELAY: Duration = Duration::from_millis(250);
/// Base delay for exponential backoff; doubles on each further retry
pub const EXPONENTIAL_RETRY_BASE: Duration = Duration::from_millis(500);

/// Delay before retry number `retry` (1-based)
pub fn retry_delay(backoff: Backoff, retry: u32) -> Duration {
    match backoff {
        Backoff::Linear => LINEAR_RETRY_DELAY,
        Backoff::Exponential => EXPONENTIAL_RETRY_BASE * 2u32.pow(retry.saturating_sub(1)),
    }
}

/// Execute a validated descriptor: build, attempt, retry, normalize
///
/// With `retry_count = 0` exactly one attempt is made and its outcome is
/// returned directly. With `retry_count = N`, up to N further attempts
/// follow retryable failures, and the final failure is surfaced with its
/// payload intact.
pub async fn execute_http(
    descriptor: &RequestDescriptor,
    transport: &dyn Transport,
) -> Result<ExecutionResult> {
    let prepared = prepare(descriptor)?;
    let max_attempts = descriptor.retry_count + 1;
    let mut attempt = 1u32;

    loop {
        match run_attempt(&prepared, descriptor.timeout, transport).await {
            Ok(result) => {
                debug!(
                    attempt,
                    status = result.metadata.status,
                    duration_ms = result.metadata.duration_ms,
                    url = %prepared.outbound.url,
                    "request succeeded"
                );
                return Ok(result);
            }
            Err(err) if attempt < max_attempts && err.is_retryable() => {
                let delay = retry_delay(descriptor.backoff, attempt);
                warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "attempt failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// One attempt: timer-bounded transport call, then classification
async fn run_attempt(
    prepared: &PreparedRequest,
    timeout: Duration,
    transport: &dyn Transport,
) -> Result<ExecutionResult> {
    let start = Instant::now();
    let raw = match tokio::time::timeout(timeout, transport.perform(&prepared.outbound)).await {
        Ok(outcome) => outcome?,
        // The elapsed timer drops the in-flight future, aborting the call.
        Err(_) => {
            return Err(Error::transport(format!(
                "request timed out after {}ms",
                timeout.as_millis()
            )))
        }
    };
    let duration_ms = start.elapsed().as_millis() as u64;

    let result = normalize(&raw, prepared.preview.clone(), duration_ms);
    if result.metadata.is_success() {
        Ok(result)
    } else {
        Err(Error::http_status(result))
    }
}
