//! Generic picker module
//!
//! Provides a trait for cursor-based list selection, shared by the popup
//! pickers so select_next/select_prev logic is written once.

mod traits;

pub use traits::Picker;
