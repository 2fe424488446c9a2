//! Picker state.
//!
//! All mutable state for one prompt lives here so rendering can be a pure
//! function over `&PickerState` and input handling a function over
//! `&mut PickerState`.

use crate::core::packages::PickItem;

/// How the prompt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Index into the original item list.
    Picked(usize),
    Cancelled,
}

pub struct PickerState {
    pub items: Vec<PickItem>,
    pub placeholder: String,
    /// Filter text typed by the user.
    pub query: String,
    /// Indices into `items` that match `query`, in list order.
    pub filtered: Vec<usize>,
    /// Index into `filtered` that is currently highlighted.
    pub selected: usize,
    /// First visible row of `filtered`.
    pub offset: usize,
    /// Set once the user confirms or dismisses; ends the loop.
    pub outcome: Option<PickerOutcome>,
}

impl PickerState {
    pub fn new(items: Vec<PickItem>, placeholder: impl Into<String>) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            items,
            placeholder: placeholder.into(),
            query: String::new(),
            filtered,
            selected: 0,
            offset: 0,
            outcome: None,
        }
    }

    /// Recompute `filtered`.  Case-insensitive substring over label and
    /// description.
    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                needle.is_empty()
                    || item.label.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
        self.offset = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.filtered.len().saturating_sub(1);
    }

    /// Move by `rows`, clamped to the filtered list.
    pub fn page(&mut self, rows: isize) {
        let last = self.filtered.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(rows).min(last);
    }

    /// Item index under the highlight, if anything matches.
    pub fn current_item(&self) -> Option<usize> {
        self.filtered.get(self.selected).copied()
    }

    /// Ensure the selected row is visible within a viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected - height + 1;
        }
    }
}
