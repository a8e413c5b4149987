// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request descriptor model and validation
//!
//! The descriptor is the declarative input of the engine: one structure
//! fully specifying an HTTP call. Validation normalizes untyped input into
//! the closed types in [`types`], rejecting invalid input before execution.

mod types;
mod validate;

pub use types::{
    Auth, Backoff, BodySpec, KeyValueEntry, Method, RequestDescriptor, RETRY_COUNT_MAX,
    TIMEOUT_DEFAULT_MS, TIMEOUT_MAX_MS, TIMEOUT_MIN_MS,
};
pub use validate::{validate, FieldViolation, ValidationReport};
