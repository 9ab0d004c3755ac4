//! API Access
//!
//! Bearer-authenticated HTTP adapter for the Trimly API.

pub mod client;

pub use client::{ApiClient, BusinessInfoPatch};
