//! Ratatui widget that renders the filtered package list of a
//! [`PickerState`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::app::state::PickerState;

use super::theme::Theme;

/// Created fresh each frame.  Expects `state.clamp_scroll` to have been
/// called with the inner height beforehand.
pub struct PickerWidget<'a> {
    state: &'a PickerState,
    block: Option<Block<'a>>,
}

impl<'a> PickerWidget<'a> {
    pub fn new(state: &'a PickerState) -> Self {
        Self { state, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for PickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let state = self.state;
        if state.filtered.is_empty() {
            Line::from(Span::styled("  No matching packages", Theme::empty_style()))
                .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
            return;
        }

        let rows = state
            .filtered
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);
        for (y, (row, &item_idx)) in (inner.y..).zip(rows) {
            let item = &state.items[item_idx];
            let is_selected = row == state.selected;
            let line = Line::from(vec![
                Span::raw(if is_selected { "▸ " } else { "  " }),
                Span::styled(item.label.as_str(), Theme::label_style()),
                Span::raw("  "),
                Span::styled(item.description.as_str(), Theme::description_style()),
            ]);
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            line.render(row_area, buf);
            if is_selected {
                buf.set_style(row_area, Theme::selected_style());
            }
        }
    }
}
