// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! specgrade binary entry point.

use std::process::ExitCode;

use specgrade::cli::main_with_registry;
use specgrade::harness::TesterRegistry;

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    main_with_registry(TesterRegistry::new())
}
