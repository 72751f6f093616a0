use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C

    // Traversal
    Previous,
    Next,
    PreviousGroup,
    NextGroup,
    Top,
    Bottom,
    ReadCurrent,

    // Screen lifecycle
    SwitchScreen,
    ToggleDetail,
    Reload,
    Reset,

    Resize,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Translate a key press into a `TuiEvent`. Releases and repeats of
/// non-navigation keys are dropped.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        // Ctrl+Arrows jump by group (PageUp/PageDown do the same)
        (KeyModifiers::CONTROL, KeyCode::Up) => Some(TuiEvent::PreviousGroup),
        (KeyModifiers::CONTROL, KeyCode::Down) => Some(TuiEvent::NextGroup),
        (_, KeyCode::PageUp) => Some(TuiEvent::PreviousGroup),
        (_, KeyCode::PageDown) => Some(TuiEvent::NextGroup),
        (_, KeyCode::Up) => Some(TuiEvent::Previous),
        (_, KeyCode::Down) => Some(TuiEvent::Next),
        (_, KeyCode::Home) => Some(TuiEvent::Top),
        (_, KeyCode::End) => Some(TuiEvent::Bottom),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::ReadCurrent),
        (_, KeyCode::Tab) => Some(TuiEvent::SwitchScreen),
        (_, KeyCode::Char('v')) => Some(TuiEvent::ToggleDetail),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Reload),
        (_, KeyCode::Char('x')) => Some(TuiEvent::Reset),
        (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        _ => None,
    }
}
