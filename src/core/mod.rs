//! # Core Application Logic
//!
//! This module contains statnav's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Entry / GroupBounds  │
//!                    │  • NavigationEngine     │
//!                    │  • Presenter (announce) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No audio. │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Screen   │      │   Game     │
//!     │  Adapter   │      │  reader    │      │  overlay   │
//!     │ (ratatui)  │      │  (future)  │      │  (future)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entry`]: `Entry<G>`, one `label: value` line with its group tag
//! - [`groups`]: `GroupBounds`, where each group run starts
//! - [`engine`]: `NavigationEngine<G>`, the cursor and every traversal
//! - [`announce`]: formatting reads and delivering them to a sink
//! - [`screens`]: per-screen tag enums and the `Navigator` trait object
//! - [`sheet`]: loading entries from a TOML stat sheet
//! - [`config`]: layered settings
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`

pub mod action;
pub mod announce;
pub mod config;
pub mod engine;
pub mod entry;
pub mod groups;
pub mod screens;
pub mod sheet;
pub mod state;

// Re-export commonly used types for convenience
pub use announce::{AnnouncementSink, GroupNames, Presenter, Transcript};
pub use engine::{EnabledGate, Motion, NavigationEngine};
pub use entry::Entry;
pub use groups::GroupBounds;
