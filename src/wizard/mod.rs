//! Onboarding Wizard
//!
//! Step model and the controller component that drives it.

pub mod controller;
pub mod step;

pub use controller::Wizard;
