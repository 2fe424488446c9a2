//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Takes the picker state and turns it into cells on the terminal.  No
//! filesystem I/O happens here.

pub mod layout;
pub mod picker_widget;
pub mod theme;
