//! Step Forms
//!
//! Per-step editors sharing one draft/save discipline: seed from the
//! session profile, track clean/dirty against the last-saved snapshot, save
//! through the API client.

pub mod draft;
pub mod policy;
pub mod preferences;
pub mod pricing;
pub mod schedule;

pub use policy::PolicyForm;
pub use preferences::PreferencesForm;
pub use pricing::PricingForm;
pub use schedule::ScheduleForm;
