//! Page modules for the two feature views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal, initializes it from browser storage on
//! mount, and delegates every mutation to the matching `state` module.

pub mod currency_generator;
pub mod value_editor;
