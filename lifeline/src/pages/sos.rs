use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use waypoint::{Action, Event, View};

/// Emergency page: broadcast an urgent blood request.
#[derive(Default)]
pub struct SosPage;

impl View for SosPage {
    fn title(&self) -> &str {
        "Emergency SOS"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let banner = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                "⚠ EMERGENCY BLOOD REQUEST ⚠",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[0]);

        let info_lines = vec![
            Line::from(""),
            Line::from(" An SOS notifies every matching donor within 25 km and"),
            Line::from(" flags the request to nearby hospital blood banks."),
            Line::from(""),
            Line::from(vec![
                Span::styled(" 1. ", Style::default().fg(Color::Red)),
                Span::raw("Matching donors receive an SMS with your location"),
            ]),
            Line::from(vec![
                Span::styled(" 2. ", Style::default().fg(Color::Red)),
                Span::raw("Hospitals with stock are asked to reserve units"),
            ]),
            Line::from(vec![
                Span::styled(" 3. ", Style::default().fg(Color::Red)),
                Span::raw("You are called back as soon as a match confirms"),
            ]),
            Line::from(""),
            Line::styled(
                " Press Enter to broadcast (demo: no message is sent).",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let info = Paragraph::new(info_lines).block(
            Block::default()
                .title(" How it works ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(info, chunks[1]);

        let footer = Paragraph::new(" h Home │ Esc Back │ q Quit ")
            .style(Style::default().bg(Color::Red).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('h') => Some(Action::Navigate("/".to_string())),
                KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn keymap_emits_the_expected_actions() {
        let mut page = SosPage;
        assert_eq!(
            page.handle_event(key(KeyCode::Char('h'))),
            Some(Action::Navigate("/".into()))
        );
        assert_eq!(page.handle_event(key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(page.handle_event(key(KeyCode::Char('q'))), Some(Action::Quit));
    }
}
