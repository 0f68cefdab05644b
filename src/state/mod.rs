//! State Management
//!
//! Global application state, domain entities, and navigation translations.

pub mod global;
pub mod i18n;

pub use global::{provide_global_state, GlobalState};
pub use i18n::Lang;
