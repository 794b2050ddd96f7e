//! # mxprompt-core - Core Domain Types
//!
//! Foundation crate for MX Prompt Designer. Provides the form and metrics
//! domain types, the prompt template, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Form Types (`types`)
//! - [`AgentRole`] - Persona selector (Research Assistant, Code Reviewer, ...)
//! - [`FormInput`] - Task context, goals and role
//!
//! ### Prompt (`prompt`)
//! - [`render_prompt()`] - Fill the fixed template from a form snapshot
//! - [`GeneratedOutput`] - Prompt text plus metrics, replaced as one value
//!
//! ### Metrics (`metrics`)
//! - [`PromptMetrics`] - The four quality scores
//! - [`chart_entries()`] - Ordered, colored chart rows
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mxprompt_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod metrics;
pub mod prelude;
pub mod prompt;
pub mod types;

pub use error::{Error, Result};
pub use metrics::{chart_entries, ChartEntry, MetricKind, PromptMetrics};
pub use prompt::{render_prompt, GeneratedOutput, OUTPUT_PLACEHOLDER, PROMPT_BODY};
pub use types::{AgentRole, FormInput};
