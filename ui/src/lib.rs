//! This crate contains the employee registration page and the components it is built from.

pub mod app;
pub use app::EmployeeRegistration;

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;
