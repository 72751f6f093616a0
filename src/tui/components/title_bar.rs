//! # TitleBar Component
//!
//! Top status bar: which screen is open, the latest status message, and
//! whether navigation is currently possible.
//!
//! TitleBar is purely presentational. It receives everything as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Status", "Stats reloaded".into(), true);
//! title_bar.render(frame, area);
//! ```
//!
//! The text changes based on state:
//!
//! 1. **Inactive**: `"statnav (screen: Status) | Stats reloaded | navigation off"`
//! 2. **Status message**: `"statnav (screen: Status) | Stats reloaded"`
//! 3. **Default**: `"statnav (screen: Status)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Open screen (e.g. "Status", "Bestiary")
    pub screen: &'static str,
    /// Transient status (e.g. "Detail view hidden")
    pub status_message: String,
    /// Whether the engine accepts navigation right now
    pub active: bool,
}

impl TitleBar {
    pub fn new(screen: &'static str, status_message: String, active: bool) -> Self {
        Self {
            screen,
            status_message,
            active,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("statnav (screen: {})", self.screen);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if !self.active {
            text.push_str(" | navigation off");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
