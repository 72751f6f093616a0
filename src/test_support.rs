//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::announce::{GroupNames, Presenter};
use crate::core::engine::{EnabledGate, NavigationEngine};
use crate::core::entry::Entry;

/// Minimal two-group tag used by engine tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Status,
    Options,
}

/// `[Level 12 (Status), HP 30/30 (Status), Gil 100 (Options)]`
pub fn sample_entries() -> Vec<Entry<Tag>> {
    vec![
        Entry::new("Level", "12", Tag::Status),
        Entry::new("HP", "30/30", Tag::Status),
        Entry::new("Gil", "100", Tag::Options),
    ]
}

pub fn sample_names() -> GroupNames<Tag> {
    GroupNames::default()
        .with(Tag::Status, "Status")
        .with(Tag::Options, "Options")
}

/// An always-enabled engine already initialized with [`sample_entries`].
pub fn sample_engine() -> NavigationEngine<Tag> {
    let mut engine = NavigationEngine::new(Presenter::new(sample_names()), EnabledGate::always())
        .named("test");
    engine.initialize(sample_entries());
    engine
}

/// Creates a test App on the status screen with the built-in demo sheet.
pub fn test_app() -> crate::core::state::App {
    let config = crate::core::config::resolve(
        &Default::default(),
        Some(crate::Screen::Status),
        None,
    );
    crate::core::state::App::from_config(&config, crate::core::sheet::demo_sheet())
}
