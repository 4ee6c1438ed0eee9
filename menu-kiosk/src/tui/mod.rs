//! Terminal front end
//!
//! - **input**: key bindings and view-local cursor state
//! - **view**: rendering of the menu, cart and dialogs
//!
//! The loop redraws, drains the catalog channel, then polls the keyboard.
//! Every state change is an [`AppEvent`] passed to [`AppState::update`].

pub mod input;
pub mod view;

pub use input::{Action, Focus, ViewState, map_key};

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::oneshot;

use crate::app::{AppEvent, AppState};
use crate::catalog::CatalogOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Take over the terminal and run until the user quits
pub fn run(state: &mut AppState, catalog_rx: oneshot::Receiver<CatalogOutcome>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, state, catalog_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    mut catalog_rx: oneshot::Receiver<CatalogOutcome>,
) -> io::Result<()> {
    let mut view = ViewState::default();
    let mut catalog_pending = true;

    loop {
        view.clamp(state.visible_items().len(), state.cart_lines().len());
        terminal.draw(|f| view::ui(f, state, &view))?;

        if catalog_pending {
            match catalog_rx.try_recv() {
                Ok(outcome) => {
                    catalog_pending = false;
                    dispatch(state, AppEvent::CatalogLoaded(outcome));
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    catalog_pending = false;
                    dispatch(
                        state,
                        AppEvent::CatalogLoaded(CatalogOutcome::Failed(
                            "catalog task ended without a result".to_string(),
                        )),
                    );
                }
            }
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }

        match map_key(key.code, &view, state) {
            Action::Quit => return Ok(()),
            Action::ToggleFocus => {
                view.focus = match view.focus {
                    Focus::Menu => Focus::Cart,
                    Focus::Cart => Focus::Menu,
                };
            }
            Action::CursorUp => match view.focus {
                Focus::Menu => view.menu_cursor = view.menu_cursor.saturating_sub(1),
                Focus::Cart => view.cart_cursor = view.cart_cursor.saturating_sub(1),
            },
            Action::CursorDown => match view.focus {
                Focus::Menu => view.menu_cursor += 1,
                Focus::Cart => view.cart_cursor += 1,
            },
            Action::Dispatch(event) => {
                if matches!(event, AppEvent::SelectCategory(_)) {
                    view.menu_cursor = 0;
                }
                dispatch(state, event);
            }
            Action::Ignore => {}
        }
    }
}

fn dispatch(state: &mut AppState, event: AppEvent) {
    if let Err(e) = state.update(event) {
        tracing::debug!(error = %e, "Event rejected");
    }
}
