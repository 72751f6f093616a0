//! UI components for the statnav TUI.
//!
//! Each component implements [`Component`](super::component::Component) and
//! renders one region of the screen:
//!
//! - [`TitleBar`]: screen name, status message, navigation state
//! - [`StatList`]: the navigation buffer with group headers and cursor
//! - [`TranscriptPanel`]: recent announcements

pub mod stat_list;
pub mod title_bar;
pub mod transcript;

pub use stat_list::StatList;
pub use title_bar::TitleBar;
pub use transcript::TranscriptPanel;
