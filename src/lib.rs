//! statnav library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which stat screen is being navigated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    #[default]
    Status,
    Bestiary,
}

impl Screen {
    /// Parses a config/env value such as `"bestiary"` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true).ok()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Status => "Status",
            Screen::Bestiary => "Bestiary",
        }
    }

    /// The screen Tab switches to.
    pub fn next(self) -> Self {
        match self {
            Screen::Status => Screen::Bestiary,
            Screen::Bestiary => Screen::Status,
        }
    }
}
