use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{StatList, TitleBar, TranscriptPanel};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HELP_TEXT: &str = " ↑↓ Step  PgUp/PgDn Group  Home/End Ends  Enter Read  Tab Screen  v View  r Reload  x Clear  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(3), Length(7), Length(1)]);
    let [title_area, list_area, transcript_area, help_area] = layout.areas(frame.area());

    let view = app.navigator.view();

    TitleBar::new(app.screen().label(), app.status_message.clone(), view.active)
        .render(frame, title_area);

    let list_title = if app.detail_visible.get() {
        app.screen().label().to_string()
    } else {
        format!("{} (hidden)", app.screen().label())
    };
    StatList::new(&view, &mut tui.list_state, &list_title).render(frame, list_area);

    TranscriptPanel::new(&app.transcript).render(frame, transcript_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
