//! # Screens
//!
//! Each stat screen is a thin configuration over the shared
//! [`NavigationEngine`]: a group tag enum, its default display names, and a
//! way to pull that screen's rows out of a [`StatSheet`].
//!
//! The host holds the current screen's engine as `Box<dyn Navigator>`, built
//! when the screen opens and dropped when it closes.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use serde::Deserialize;

use super::announce::{AnnouncementSink, GroupNames, Presenter, TemplateReader};
use super::config::ResolvedConfig;
use super::engine::{EnabledGate, Motion, NavigationEngine};
use super::entry::{Entry, GroupTag};
use super::sheet::{StatSheet, visible_entries};
use crate::Screen;

// ============================================================================
// Group Tags
// ============================================================================

/// Groups on the character status screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGroup {
    Status,
    Attributes,
    Combat,
    Equipment,
}

/// Groups on the bestiary detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestiaryGroup {
    Overview,
    Stats,
    Resistances,
    Weaknesses,
    Drops,
}

/// Ties a group tag type to its screen.
pub trait ScreenTag: GroupTag + 'static {
    const SCREEN: Screen;

    fn all() -> &'static [Self];

    /// Key used in config tables and stat sheets.
    fn key(&self) -> &'static str;

    fn default_name(&self) -> &'static str;

    /// This screen's visible rows, in sheet order.
    fn entries(sheet: &StatSheet) -> Vec<Entry<Self>>;
}

impl ScreenTag for StatusGroup {
    const SCREEN: Screen = Screen::Status;

    fn all() -> &'static [Self] {
        &[
            StatusGroup::Status,
            StatusGroup::Attributes,
            StatusGroup::Combat,
            StatusGroup::Equipment,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            StatusGroup::Status => "status",
            StatusGroup::Attributes => "attributes",
            StatusGroup::Combat => "combat",
            StatusGroup::Equipment => "equipment",
        }
    }

    fn default_name(&self) -> &'static str {
        match self {
            StatusGroup::Status => "Status",
            StatusGroup::Attributes => "Attributes",
            StatusGroup::Combat => "Combat",
            StatusGroup::Equipment => "Equipment",
        }
    }

    fn entries(sheet: &StatSheet) -> Vec<Entry<Self>> {
        visible_entries(&sheet.status)
    }
}

impl ScreenTag for BestiaryGroup {
    const SCREEN: Screen = Screen::Bestiary;

    fn all() -> &'static [Self] {
        &[
            BestiaryGroup::Overview,
            BestiaryGroup::Stats,
            BestiaryGroup::Resistances,
            BestiaryGroup::Weaknesses,
            BestiaryGroup::Drops,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            BestiaryGroup::Overview => "overview",
            BestiaryGroup::Stats => "stats",
            BestiaryGroup::Resistances => "resistances",
            BestiaryGroup::Weaknesses => "weaknesses",
            BestiaryGroup::Drops => "drops",
        }
    }

    fn default_name(&self) -> &'static str {
        match self {
            BestiaryGroup::Overview => "Overview",
            BestiaryGroup::Stats => "Stats",
            BestiaryGroup::Resistances => "Resistances",
            BestiaryGroup::Weaknesses => "Weaknesses",
            BestiaryGroup::Drops => "Drops",
        }
    }

    fn entries(sheet: &StatSheet) -> Vec<Entry<Self>> {
        visible_entries(&sheet.bestiary)
    }
}

/// Default names for every tag of `G`, with per-key overrides applied.
pub fn group_names<G: ScreenTag>(
    overrides: &HashMap<String, String>,
    fallback: &str,
) -> GroupNames<G> {
    let mut names = GroupNames::new(fallback);
    for tag in G::all() {
        let name = overrides
            .get(tag.key())
            .map(String::as_str)
            .unwrap_or(tag.default_name());
        names.insert(tag.clone(), name);
    }
    for key in overrides.keys() {
        if !G::all().iter().any(|t| t.key() == key.as_str()) {
            warn!("Ignoring display name for unknown {} group {:?}", G::SCREEN.label(), key);
        }
    }
    names
}

// ============================================================================
// Navigator
// ============================================================================

/// One rendered row of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
    pub group: String,
    /// First row of its group run.
    pub run_start: bool,
}

/// Snapshot of an engine for drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferView {
    pub rows: Vec<Row>,
    pub cursor: Option<usize>,
    pub active: bool,
}

/// Screen-agnostic face of a [`NavigationEngine`].
pub trait Navigator {
    fn screen(&self) -> Screen;

    /// Rebuilds the buffer from `sheet`; cursor goes back to the top.
    fn load(&mut self, sheet: &StatSheet);

    fn reset(&mut self);

    fn is_active(&self) -> bool;

    fn apply(&mut self, motion: Motion, sink: &mut dyn AnnouncementSink) -> bool;

    fn read_current(&mut self, sink: &mut dyn AnnouncementSink, interrupt: bool) -> bool;

    fn view(&self) -> BufferView;
}

impl<G: ScreenTag> Navigator for NavigationEngine<G> {
    fn screen(&self) -> Screen {
        G::SCREEN
    }

    fn load(&mut self, sheet: &StatSheet) {
        self.initialize(G::entries(sheet));
    }

    fn reset(&mut self) {
        NavigationEngine::reset(self);
    }

    fn is_active(&self) -> bool {
        NavigationEngine::is_active(self)
    }

    fn apply(&mut self, motion: Motion, sink: &mut dyn AnnouncementSink) -> bool {
        NavigationEngine::apply(self, motion, sink)
    }

    fn read_current(&mut self, sink: &mut dyn AnnouncementSink, interrupt: bool) -> bool {
        NavigationEngine::read_current(self, sink, interrupt)
    }

    fn view(&self) -> BufferView {
        let names = &self.presenter().names;
        let bounds = self.bounds();
        let rows = self
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| Row {
                label: entry.label().to_string(),
                value: entry.value().to_string(),
                group: names.display(entry.group()).to_string(),
                run_start: bounds.is_some_and(|b| b.is_run_start(i)),
            })
            .collect();
        BufferView {
            rows,
            cursor: self.cursor(),
            active: NavigationEngine::is_active(self),
        }
    }
}

/// Builds an (uninitialized) engine for tag type `G` from resolved config.
pub fn build_engine<G: ScreenTag>(
    config: &ResolvedConfig,
    overrides: &HashMap<String, String>,
    gate: EnabledGate,
) -> NavigationEngine<G> {
    let mut presenter = Presenter::new(group_names::<G>(overrides, &config.fallback_group))
        .with_messages(config.messages.clone());
    match TemplateReader::parse(&config.entry_format) {
        Ok(reader) => presenter = presenter.with_reader(reader),
        Err(e) => warn!("Using default entry format: {}", e),
    }
    NavigationEngine::new(presenter, gate).named(G::SCREEN.label())
}

/// Opens `screen`: builds its engine, gated on `visible`, and loads `sheet`.
pub fn open_screen(
    screen: Screen,
    config: &ResolvedConfig,
    visible: Rc<Cell<bool>>,
    sheet: &StatSheet,
) -> Box<dyn Navigator> {
    let gate = EnabledGate::from_flag(visible);
    let mut navigator: Box<dyn Navigator> = match screen {
        Screen::Status => Box::new(build_engine::<StatusGroup>(config, &config.status_names, gate)),
        Screen::Bestiary => Box::new(build_engine::<BestiaryGroup>(
            config,
            &config.bestiary_names,
            gate,
        )),
    };
    navigator.load(sheet);
    navigator
}
