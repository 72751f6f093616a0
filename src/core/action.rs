//! # Actions
//!
//! Everything that can happen in statnav becomes an `Action`.
//! User presses Down? That's `Action::Move(Motion::Next)`.
//! A reloaded sheet arrives? That's `Action::SheetLoaded(sheet)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! caller should perform. No file access or terminal work happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use std::path::PathBuf;

use log::{debug, info};

use crate::core::engine::Motion;
use crate::core::sheet::StatSheet;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    Move(Motion),
    ReadCurrent,
    SwitchScreen,
    ToggleDetail,
    ReloadRequested,
    SheetLoaded(StatSheet),
    ResetScreen,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Load the sheet at the given path (or the demo sheet) and send it
    /// back as `Action::SheetLoaded`.
    LoadSheet(Option<PathBuf>),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Move(motion) => {
            if !app.navigator.apply(motion, &mut app.transcript) {
                app.status_message = String::from("Navigation not available");
            }
            Effect::None
        }
        Action::ReadCurrent => {
            app.navigator.read_current(&mut app.transcript, true);
            Effect::None
        }
        Action::SwitchScreen => {
            let next = app.screen().next();
            app.switch_screen(next);
            Effect::None
        }
        Action::ToggleDetail => {
            let visible = !app.detail_visible.get();
            app.detail_visible.set(visible);
            info!("Detail view {}", if visible { "shown" } else { "hidden" });
            app.status_message = if visible {
                String::from("Detail view shown")
            } else {
                String::from("Detail view hidden")
            };
            Effect::None
        }
        Action::ReloadRequested => Effect::LoadSheet(app.config.sheet_path.clone()),
        Action::SheetLoaded(sheet) => {
            app.replace_sheet(sheet);
            Effect::None
        }
        Action::ResetScreen => {
            app.navigator.reset();
            app.status_message = String::from("Stats cleared");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
