//! # Navigation Engine
//!
//! A cursor over an ordered, group-partitioned list of entries.
//!
//! ```text
//! NavigationEngine<G>
//! ├── snapshot: Option<Snapshot>   // entries + bounds, replaced as one unit
//! │   ├── entries: Vec<Entry<G>>
//! │   └── bounds: GroupBounds
//! ├── cursor: Option<usize>        // None while there is no buffer
//! ├── gate: EnabledGate            // externally owned "view is on screen" flag
//! └── presenter: Presenter<G>      // formatting + display names
//! ```
//!
//! ## States
//!
//! - **Inactive**: no buffer, or the gate says navigation is disabled.
//!   Every motion is a silent no-op; `read_current` speaks the
//!   "unavailable" message instead.
//! - **Active**: non-empty buffer and the gate is open.
//!
//! There is no error state. A cursor that ends up outside the buffer
//! (see [`NavigationEngine::force_cursor`]) is snapped back to 0.
//!
//! Every motion wraps in both directions and ends with at most one read.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use super::announce::{AnnouncementSink, Presenter};
use super::entry::{Entry, GroupTag};
use super::groups::GroupBounds;

/// Answers "may the user navigate right now?" on behalf of the host.
pub struct EnabledGate(Box<dyn Fn() -> bool>);

impl EnabledGate {
    pub fn new(query: impl Fn() -> bool + 'static) -> Self {
        Self(Box::new(query))
    }

    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Gate backed by a flag the host flips as its view appears/disappears.
    pub fn from_flag(flag: Rc<Cell<bool>>) -> Self {
        Self::new(move || flag.get())
    }

    pub fn is_enabled(&self) -> bool {
        (self.0)()
    }
}

/// Cursor movements. Each maps to one traversal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Next,
    Previous,
    NextGroup,
    PreviousGroup,
    Top,
    Bottom,
}

/// Which announcement format a motion ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadKind {
    Plain,
    Grouped,
}

struct Snapshot<G> {
    entries: Vec<Entry<G>>,
    bounds: GroupBounds,
}

pub struct NavigationEngine<G> {
    name: String,
    snapshot: Option<Snapshot<G>>,
    cursor: Option<usize>,
    gate: EnabledGate,
    presenter: Presenter<G>,
}

impl<G: GroupTag> NavigationEngine<G> {
    pub fn new(presenter: Presenter<G>, gate: EnabledGate) -> Self {
        Self {
            name: String::from("stats"),
            snapshot: None,
            cursor: None,
            gate,
            presenter,
        }
    }

    /// Name used in log lines.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Replaces the buffer wholesale and puts the cursor on the first entry.
    /// An empty sequence leaves the engine inactive.
    pub fn initialize(&mut self, entries: impl IntoIterator<Item = Entry<G>>) {
        let entries: Vec<Entry<G>> = entries.into_iter().collect();
        if entries.is_empty() {
            info!("[{}] initialized with no entries; navigation inactive", self.name);
            self.snapshot = None;
            self.cursor = None;
            return;
        }

        let bounds = GroupBounds::build(&entries);
        info!(
            "[{}] initialized with {} entries in {} group runs",
            self.name,
            entries.len(),
            bounds.len()
        );
        debug!("[{}] group bounds: {:?}", self.name, bounds.as_slice());
        self.snapshot = Some(Snapshot { entries, bounds });
        self.cursor = Some(0);
    }

    /// Discards buffer, bounds and cursor. Safe to call repeatedly.
    pub fn reset(&mut self) {
        if self.snapshot.is_some() {
            info!("[{}] reset", self.name);
        }
        self.snapshot = None;
        self.cursor = None;
    }

    pub fn is_active(&self) -> bool {
        !self.entries().is_empty() && self.gate.is_enabled()
    }

    /// Overrides the cursor, e.g. to restore a remembered position.
    /// Out-of-range values are kept and corrected on the next read.
    pub fn force_cursor(&mut self, index: usize) {
        if self.snapshot.is_some() {
            debug!("[{}] cursor forced to {}", self.name, index);
            self.cursor = Some(index);
        }
    }

    // ------------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------------

    /// Moves one entry forward, wrapping past the end. Plain read.
    pub fn next(&mut self, sink: &mut dyn AnnouncementSink) -> bool {
        self.apply(Motion::Next, sink)
    }

    /// Moves one entry back, wrapping past the start. Plain read.
    pub fn previous(&mut self, sink: &mut dyn AnnouncementSink) -> bool {
        self.apply(Motion::Previous, sink)
    }

    /// Moves to the start of the next group run. Group-prefixed read.
    pub fn jump_to_next_group(&mut self, sink: &mut dyn AnnouncementSink) -> bool {
        self.apply(Motion::NextGroup, sink)
    }

    /// Moves to the nearest run start before the cursor. Group-prefixed read.
    pub fn jump_to_previous_group(&mut self, sink: &mut dyn AnnouncementSink) -> bool {
        self.apply(Motion::PreviousGroup, sink)
    }

    pub fn jump_to_top(&mut self, sink: &mut dyn AnnouncementSink) -> bool {
        self.apply(Motion::Top, sink)
    }

    pub fn jump_to_bottom(&mut self, sink: &mut dyn AnnouncementSink) -> bool {
        self.apply(Motion::Bottom, sink)
    }

    /// Runs `motion` and reads the entry it lands on (interrupting).
    /// Returns `false` without touching anything when inactive.
    pub fn apply(&mut self, motion: Motion, sink: &mut dyn AnnouncementSink) -> bool {
        if !self.is_active() {
            debug!("[{}] {:?} ignored: navigation inactive", self.name, motion);
            return false;
        }
        let Some(snapshot) = self.snapshot.as_ref() else {
            return false;
        };

        let len = snapshot.entries.len();
        let from = self.position(len);
        let (to, kind) = match motion {
            Motion::Next => ((from + 1) % len, ReadKind::Plain),
            Motion::Previous => ((from + len - 1) % len, ReadKind::Plain),
            Motion::NextGroup => match snapshot.bounds.next_after(from) {
                Some(bound) => (bound, ReadKind::Grouped),
                None => return false,
            },
            Motion::PreviousGroup => match snapshot.bounds.previous_before(from) {
                Some(bound) => (bound, ReadKind::Grouped),
                None => return false,
            },
            Motion::Top => (0, ReadKind::Plain),
            Motion::Bottom => (len - 1, ReadKind::Plain),
        };

        debug!("[{}] {:?}: {} -> {}", self.name, motion, from, to);
        self.cursor = Some(to);
        self.read_at(to, kind, sink, true);
        true
    }

    /// Re-reads the entry under the cursor.
    ///
    /// When inactive, announces the "unavailable" message instead and
    /// returns `false`. An out-of-range cursor is snapped to 0 first.
    pub fn read_current(&mut self, sink: &mut dyn AnnouncementSink, interrupt: bool) -> bool {
        if !self.is_active() {
            debug!("[{}] read_current while inactive", self.name);
            self.presenter.unavailable(sink, interrupt);
            return false;
        }

        let len = self.len();
        let index = self.position(len);
        if self.cursor != Some(index) {
            debug!(
                "[{}] cursor {:?} out of range for {} entries, snapping to 0",
                self.name, self.cursor, len
            );
            self.cursor = Some(index);
        }
        self.read_at(index, ReadKind::Plain, sink, interrupt);
        true
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn entries(&self) -> &[Entry<G>] {
        self.snapshot
            .as_ref()
            .map(|s| s.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn bounds(&self) -> Option<&GroupBounds> {
        self.snapshot.as_ref().map(|s| &s.bounds)
    }

    /// Entry under the cursor, if the cursor is valid.
    pub fn current(&self) -> Option<&Entry<G>> {
        self.cursor.and_then(|c| self.entries().get(c))
    }

    pub fn presenter(&self) -> &Presenter<G> {
        &self.presenter
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Cursor clamped into `0..len`; anything out of range becomes 0.
    fn position(&self, len: usize) -> usize {
        match self.cursor {
            Some(c) if c < len => c,
            _ => 0,
        }
    }

    fn read_at(
        &self,
        index: usize,
        kind: ReadKind,
        sink: &mut dyn AnnouncementSink,
        interrupt: bool,
    ) {
        let Some(entry) = self.entries().get(index) else {
            return;
        };
        let read = match kind {
            ReadKind::Plain => self.presenter.plain(entry),
            ReadKind::Grouped => self.presenter.grouped(entry),
        };
        self.presenter.deliver(read, sink, interrupt);
    }
}
