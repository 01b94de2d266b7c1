//! # Nadir Indicators
//!
//! Derived-value computations over price series. Currently this crate holds a
//! single indicator: the windowed percent change that feeds the oversold
//! trigger scan.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   data sources, files, or the engine. It depends only on `core-types`.
//! - **Pure Projection:** `percent_change` never mutates the caller's series;
//!   it produces a parallel vector of derived values. Calling it twice with
//!   identical inputs yields identical output.

pub mod error;
pub mod percent_change;

// Re-export the key components to create a clean, public-facing API.
pub use error::IndicatorError;
pub use percent_change::percent_change;
