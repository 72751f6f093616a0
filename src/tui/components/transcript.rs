//! # Transcript Component
//!
//! Shows the most recent announcements, newest at the bottom, standing in
//! for the speech output. Interrupting reads are marked `»`, passive ones
//! `·`; announcements cut off by a later interrupt are dimmed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::announce::{Announcement, Transcript};
use crate::tui::component::Component;

pub struct TranscriptPanel<'a> {
    pub transcript: &'a Transcript,
}

impl<'a> TranscriptPanel<'a> {
    pub fn new(transcript: &'a Transcript) -> Self {
        Self { transcript }
    }
}

fn line_for(announcement: &Announcement) -> Line<'_> {
    let marker = if announcement.interrupt { "» " } else { "· " };
    let style = if announcement.superseded {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(announcement.text.as_str(), style),
    ])
}

impl Component for TranscriptPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize; // borders
        let skip = self.transcript.len().saturating_sub(visible);
        let lines: Vec<Line> = self.transcript.iter().skip(skip).map(line_for).collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Spoken ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::announce::AnnouncementSink;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shows_only_latest_lines() {
        let mut transcript = Transcript::default();
        for i in 0..6 {
            transcript.announce(&format!("line {i}"), true);
        }

        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TranscriptPanel::new(&transcript).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(!text.contains("line 2"));
        assert!(text.contains("line 3"));
        assert!(text.contains("line 5"));
    }

    #[test]
    fn test_markers_follow_interrupt_flag() {
        let mut transcript = Transcript::default();
        transcript.announce("passive", false);
        transcript.announce("moved", true);
        let lines: Vec<String> = transcript
            .iter()
            .map(|a| line_for(a).spans[0].content.to_string())
            .collect();
        assert_eq!(lines, vec!["· ", "» "]);
    }
}
