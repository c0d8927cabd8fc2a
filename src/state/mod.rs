//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split per view (`values`, `currency`, `shell`) as plain structs
//! with synchronous operations, so each view's behavior is unit-testable
//! without a browser. Pages wrap these in `RwSignal`s.

pub mod currency;
pub mod shell;
pub mod values;
