//! UI Components
//!
//! Reusable Leptos components for the onboarding wizard.

pub mod connect_card;
pub mod loading;
pub mod progress;
pub mod toast;

pub use connect_card::ConnectStep;
pub use loading::Loading;
pub use progress::WizardProgress;
pub use toast::Toast;
