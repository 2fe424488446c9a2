//! Interactive package picker on the alternate screen.
//!
//! Rendering goes to stderr so stdout stays reserved for the reveal payload
//! the shell wrapper reads.

use std::io::{stderr, Stderr};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::config::AppConfig;
use crate::core::packages::PickItem;
use crate::ui::{layout::AppLayout, picker_widget::PickerWidget, theme::Theme};

use super::event::{next_event, AppEvent};
use super::handler;
use super::state::{PickerOutcome, PickerState};

/// Show the picker and block until the user picks or dismisses.
pub fn pick(config: &AppConfig, items: &[PickItem], placeholder: &str) -> Result<Option<usize>> {
    let mut state = PickerState::new(items.to_vec(), placeholder);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;

    let result = event_loop(&mut terminal, &mut state, config);

    // ── teardown (also after a failed loop) ───────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(match state.outcome {
        Some(PickerOutcome::Picked(index)) => Some(index),
        Some(PickerOutcome::Cancelled) | None => None,
    })
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    state: &mut PickerState,
    config: &AppConfig,
) -> Result<()> {
    let hint = config.status_bar_hint();

    while state.outcome.is_none() {
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            let query = Paragraph::new(if state.query.is_empty() {
                Line::styled(state.placeholder.as_str(), Theme::placeholder_style())
            } else {
                Line::styled(format!("> {}", state.query), Theme::query_style())
            });
            frame.render_widget(query, layout.query_area);

            let block = Block::default()
                .title(format!(" {} ", state.placeholder))
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            let rows = block.inner(layout.list_area).height as usize;
            state.clamp_scroll(rows);
            frame.render_widget(PickerWidget::new(state).block(block), layout.list_area);

            let status = format!(
                " {}/{} | {}",
                state.filtered.len(),
                state.items.len(),
                hint
            );
            frame.render_widget(
                Paragraph::new(status).style(Theme::status_bar_style()),
                layout.status_area,
            );
        })?;

        match next_event()? {
            AppEvent::Key(key) => handler::handle_key(state, config, key),
            AppEvent::Resize(_, _) => {}
        }
    }

    Ok(())
}
