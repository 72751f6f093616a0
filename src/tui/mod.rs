//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. A game
//! overlay would replace it with its own input hooks and a speech sink;
//! the core stays the same.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event or a terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::widgets::ListState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::engine::Motion;
use crate::core::sheet;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    /// Scroll offset and selection of the stat list
    pub list_state: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Selection is shown by highlighting; the terminal cursor only distracts
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Map a terminal event onto a core action.
fn to_action(event: TuiEvent) -> Option<Action> {
    Some(match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
        TuiEvent::Previous => Action::Move(Motion::Previous),
        TuiEvent::Next => Action::Move(Motion::Next),
        TuiEvent::PreviousGroup => Action::Move(Motion::PreviousGroup),
        TuiEvent::NextGroup => Action::Move(Motion::NextGroup),
        TuiEvent::Top => Action::Move(Motion::Top),
        TuiEvent::Bottom => Action::Move(Motion::Bottom),
        TuiEvent::ReadCurrent => Action::ReadCurrent,
        TuiEvent::SwitchScreen => Action::SwitchScreen,
        TuiEvent::ToggleDetail => Action::ToggleDetail,
        TuiEvent::Reload => Action::ReloadRequested,
        TuiEvent::Reset => Action::ResetScreen,
        TuiEvent::Resize => return None,
    })
}

/// Runs an action and any effects it asks for. Returns `true` to quit.
fn dispatch(app: &mut App, action: Action) -> bool {
    let mut next = Some(action);
    while let Some(action) = next.take() {
        match update(app, action) {
            Effect::None => {}
            Effect::Quit => return true,
            Effect::LoadSheet(path) => {
                info!("Reloading stat sheet");
                next = Some(Action::SheetLoaded(sheet::load_or_demo(path.as_deref())));
            }
        }
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let stats = sheet::load_or_demo(config.sheet_path.as_deref());
    let mut app = App::from_config(&config, stats);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };
        needs_redraw = true;
        debug!("TUI event: {:?}", event);

        if let Some(action) = to_action(event)
            && dispatch(&mut app, action)
        {
            break;
        }
    }

    info!("statnav shutting down");
    ratatui::restore();
    Ok(())
}
