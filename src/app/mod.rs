//! Terminal host — picker state, input handling, and the event loop that
//! stands in for an editor's quick-pick.

pub mod event;
pub mod handler;
pub mod host;
pub mod picker;
pub mod state;
