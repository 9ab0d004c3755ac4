//! State Management
//!
//! Global session store and the persisted language preference.

pub mod language;
pub mod session;

pub use language::provide_language;
pub use session::{provide_session_state, SessionState};
