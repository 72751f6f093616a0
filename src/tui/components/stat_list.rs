//! # StatList Component
//!
//! Draws the navigation buffer: a header line at the start of every group
//! run, then one `label  value` line per entry, with the cursor row
//! highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListState` lives in `TuiState` (keeps the scroll offset between frames)
//! - `StatList` is created each frame with the borrowed view and state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::screens::BufferView;
use crate::tui::component::Component;

pub struct StatList<'a> {
    view: &'a BufferView,
    state: &'a mut ListState,
    title: &'a str,
}

impl<'a> StatList<'a> {
    pub fn new(view: &'a BufferView, state: &'a mut ListState, title: &'a str) -> Self {
        Self { view, state, title }
    }
}

/// Position of the cursor row in the rendered list, counting the group
/// header lines inserted above each run.
pub fn list_index(view: &BufferView) -> Option<usize> {
    let cursor = view.cursor?;
    if cursor >= view.rows.len() {
        return None;
    }
    let headers = view.rows[..=cursor].iter().filter(|r| r.run_start).count();
    Some(cursor + headers)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

impl Component for StatList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.view.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        if self.view.rows.is_empty() {
            let empty = Paragraph::new("No stats loaded. Press r to reload.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let label_width = self
            .view
            .rows
            .iter()
            .map(|r| r.label.width())
            .max()
            .unwrap_or(0);

        let mut items = Vec::with_capacity(self.view.rows.len() * 2);
        for row in &self.view.rows {
            if row.run_start {
                items.push(ListItem::new(Line::from(Span::styled(
                    row.group.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))));
            }
            items.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::raw(pad_to_width(&row.label, label_width)),
                Span::raw("  "),
                Span::styled(row.value.clone(), Style::default().fg(Color::White)),
            ])));
        }

        self.state.select(list_index(self.view));

        let highlight = if self.view.active {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut *self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screens::Row;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn row(label: &str, value: &str, group: &str, run_start: bool) -> Row {
        Row {
            label: label.to_string(),
            value: value.to_string(),
            group: group.to_string(),
            run_start,
        }
    }

    fn sample_view(cursor: Option<usize>) -> BufferView {
        BufferView {
            rows: vec![
                row("Level", "12", "Status", true),
                row("HP", "30/30", "Status", false),
                row("Gil", "100", "Options", true),
            ],
            cursor,
            active: true,
        }
    }

    #[test]
    fn test_list_index_skips_headers() {
        assert_eq!(list_index(&sample_view(Some(0))), Some(1));
        assert_eq!(list_index(&sample_view(Some(1))), Some(2));
        assert_eq!(list_index(&sample_view(Some(2))), Some(4));
        assert_eq!(list_index(&sample_view(None)), None);
        assert_eq!(list_index(&sample_view(Some(9))), None);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("HP", 5), "HP   ");
        assert_eq!(pad_to_width("Level", 3), "Level");
    }

    #[test]
    fn test_renders_group_headers_and_rows() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = sample_view(Some(2));
        let mut state = ListState::default();

        terminal
            .draw(|f| {
                StatList::new(&view, &mut state, "Status").render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Options"));
        assert!(text.contains("Level"));
        assert!(text.contains("30/30"));
        assert_eq!(state.selected(), Some(4));
    }

    #[test]
    fn test_renders_empty_placeholder() {
        let backend = TestBackend::new(50, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = BufferView::default();
        let mut state = ListState::default();

        terminal
            .draw(|f| {
                StatList::new(&view, &mut state, "Bestiary").render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("No stats loaded"));
    }
}
