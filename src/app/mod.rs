//! Application orchestration — state management, frame timing, and input
//! handling.

pub mod event;
pub mod frame;
pub mod handler;
pub mod state;
