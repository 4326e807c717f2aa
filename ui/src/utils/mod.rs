//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging macros for the browser console
//! - **format**: byte sizes and empty-value display helpers
//! - **platform**: scrolling, timers and native file access in the browser
//! - **validation**: CSS class selection for validated inputs
//!
//! Everything here compiles for both `wasm32-unknown-unknown` and native test builds.

pub mod console_macros;
pub mod format;
pub mod platform;
pub mod validation;

pub use format::*;
pub use platform::*;
pub use validation::*;
