//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into pixels on
//! the terminal.  No animation state is mutated here.

pub mod page_widget;
pub mod theme;
