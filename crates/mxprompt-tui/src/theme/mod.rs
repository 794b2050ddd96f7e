//! Centralized theme for the designer TUI.
//!
//! This module provides:
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;
