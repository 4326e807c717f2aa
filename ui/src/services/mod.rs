//! Services behind the registration form
//!
//! - **config**: limits and timings, validated before use
//! - **errors**: error taxonomy shared by photo intake, validation and submission
//! - **submission**: the `RegistrationSink` seam and its simulated implementation

pub mod config;
pub mod errors;
pub mod submission;

pub use config::*;
pub use errors::*;
pub use submission::*;
