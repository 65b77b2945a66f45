// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specification-driven grading.
//!
//! A grading run checks a submitted program's declared structure against a
//! [`ProjectSpecification`](specgrade_model::ProjectSpecification), runs the
//! registered unit test suites, and aggregates everything into a scored
//! [`Report`](report::Report).
//!
//! ```no_run
//! use specgrade::compare::assert_equals;
//! use specgrade::harness::{TestRoutine, TestSuite, TesterRegistry};
//!
//! fn main() -> std::process::ExitCode {
//!     let registry = TesterRegistry::new().with(
//!         TestSuite::new("hw1.SquareTest").routine(
//!             TestRoutine::new("testArea", |_| {
//!                 assert_equals("Area of a 2x2 square.", &4, &(2 * 2))?;
//!                 Ok(())
//!             })
//!             .points(10),
//!         ),
//!     );
//!     specgrade::cli::main_with_registry(registry)
//! }
//! ```

pub mod cli;
pub mod compare;
pub mod config;
pub mod confirm;
pub mod grader;
pub mod harness;
pub mod output_diagnostic;
pub mod report;
pub mod source_checks;
pub mod verifier;
pub mod version;
pub mod violation;

pub use specgrade_model as model;
