// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! rekku server binary
//!
//! Starts the HTTP API surface: resolves the listen port from `PORT` and
//! serves the run endpoint until stopped.

use std::process::ExitCode;

use rekku::server;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rekku=info".parse().unwrap()),
        )
        .init();

    let port = server::resolve_port();
    if let Err(e) = server::serve(port).await {
        eprintln!("Server failed: {}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
