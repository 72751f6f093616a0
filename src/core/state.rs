//! # Application State
//!
//! Core state for statnav. Domain logic only; no TUI-specific types.
//!
//! ```text
//! App
//! ├── config: ResolvedConfig           // settings after layering
//! ├── sheet: StatSheet                 // latest data from the source
//! ├── navigator: Box<dyn Navigator>    // engine for the open screen
//! ├── detail_visible: Rc<Cell<bool>>   // gate shared with the engine
//! ├── transcript: Transcript           // everything announced so far
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::cell::Cell;
use std::rc::Rc;

use log::info;

use crate::Screen;
use crate::core::announce::Transcript;
use crate::core::config::ResolvedConfig;
use crate::core::screens::{Navigator, open_screen};
use crate::core::sheet::StatSheet;

pub struct App {
    pub config: ResolvedConfig,
    pub sheet: StatSheet,
    pub navigator: Box<dyn Navigator>,
    /// Whether the detail view is on screen. The engine reads this through
    /// its gate; only the host flips it.
    pub detail_visible: Rc<Cell<bool>>,
    pub transcript: Transcript,
    pub status_message: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig, sheet: StatSheet) -> Self {
        let detail_visible = Rc::new(Cell::new(true));
        let navigator = open_screen(config.screen, config, detail_visible.clone(), &sheet);
        let mut app = Self {
            config: config.clone(),
            sheet,
            navigator,
            detail_visible,
            transcript: Transcript::new(config.transcript_capacity),
            status_message: String::from("Welcome to statnav!"),
        };
        app.announce_screen();
        app
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    /// Closes the current screen and opens `screen` with a fresh engine.
    pub fn switch_screen(&mut self, screen: Screen) {
        self.navigator.reset();
        self.navigator = open_screen(
            screen,
            &self.config,
            self.detail_visible.clone(),
            &self.sheet,
        );
        info!("Switched to {} screen", screen.label());
        self.status_message = format!("{} screen", screen.label());
        self.announce_screen();
    }

    /// Replaces the sheet and rebuilds the current screen's buffer.
    pub fn replace_sheet(&mut self, sheet: StatSheet) {
        self.sheet = sheet;
        self.navigator.load(&self.sheet);
        self.status_message = String::from("Stats reloaded");
        self.announce_screen();
    }

    /// Passive, non-interrupting read of whatever the cursor is on.
    fn announce_screen(&mut self) {
        if self.navigator.is_active() {
            self.navigator.read_current(&mut self.transcript, false);
        }
    }
}
