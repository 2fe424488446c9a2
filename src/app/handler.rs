//! Input handling — maps key events to picker state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{Action, AppConfig};

use super::state::{PickerOutcome, PickerState};

/// Rows moved by PageUp / PageDown.
const PAGE_ROWS: isize = 10;

/// Process a key event.
pub fn handle_key(state: &mut PickerState, config: &AppConfig, key: KeyEvent) {
    // Ctrl+c always dismisses, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.outcome = Some(PickerOutcome::Cancelled);
        return;
    }

    if let Some(action) = config.match_key(key) {
        match action {
            Action::MoveUp => state.select_prev(),
            Action::MoveDown => state.select_next(),
            Action::Confirm => {
                if let Some(index) = state.current_item() {
                    state.outcome = Some(PickerOutcome::Picked(index));
                }
            }
            Action::Cancel => state.outcome = Some(PickerOutcome::Cancelled),
            Action::ClearQuery => state.clear_query(),
        }
        return;
    }

    // Keys that always work, and typing into the filter.
    match key.code {
        KeyCode::Home => state.select_first(),
        KeyCode::End => state.select_last(),
        KeyCode::PageUp => state.page(-PAGE_ROWS),
        KeyCode::PageDown => state.page(PAGE_ROWS),
        KeyCode::Backspace => state.pop_char(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.push_char(c)
        }
        _ => {}
    }
}
