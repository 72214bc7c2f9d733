//! Core algorithms – the scroll damper and page layout measurement.
//!
//! Nothing in this module depends on any TUI or rendering crate, so the
//! damping recurrence and the height math stay unit-testable in isolation.

pub mod damper;
pub mod page;
