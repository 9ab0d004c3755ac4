//! Pages
//!
//! Route-level page components.

pub mod booking;
pub mod dashboard;
pub mod index;

pub use booking::Booking;
pub use dashboard::Dashboard;
pub use index::Index;
