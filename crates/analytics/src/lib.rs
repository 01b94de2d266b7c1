//! # Nadir Analytics Engine
//!
//! This crate derives the presentation-level statistics of a backtest run and
//! computes the passive buy-and-hold benchmark the strategy is judged against.
//!
//! ## Architectural Principles
//!
//! - **Layer 2 Logic:** This is a pure logic crate. It has no knowledge of
//!   files or data sources; it only reads the `RunResult` the engine returns.
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. It takes a finished run as input and produces a `RunSummary`
//!   as output, which makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the struct that contains the summary logic.
//! - `RunSummary`: the standardized struct holding the derived statistics.
//! - `benchmark::buy_and_hold`: the passive reference return.

// Declare the modules that constitute this crate.
pub mod benchmark;
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use benchmark::{BenchmarkReturn, buy_and_hold};
pub use engine::AnalyticsEngine;
pub use report::RunSummary;
