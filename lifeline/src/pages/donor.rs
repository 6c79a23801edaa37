use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use waypoint::{Action, Event, View};

/// Donor view: donor card plus requests a donor could answer.
pub struct DonorDashboard {
    nearby_requests: Vec<(&'static str, &'static str, &'static str)>, // (hospital, blood type, urgency)
}

impl Default for DonorDashboard {
    fn default() -> Self {
        Self {
            nearby_requests: vec![
                ("St. Mary's Hospital", "O+", "urgent"),
                ("City General", "O-", "routine"),
                ("Northside Clinic", "A+", "routine"),
            ],
        }
    }
}

impl View for DonorDashboard {
    fn title(&self) -> &str {
        "Donor Dashboard"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[0]);

        let card_lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" Blood type:     ", Style::default().fg(Color::DarkGray)),
                Span::styled("O+", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled(" Donations:      ", Style::default().fg(Color::DarkGray)),
                Span::raw("7"),
            ]),
            Line::from(vec![
                Span::styled(" Last donation:  ", Style::default().fg(Color::DarkGray)),
                Span::raw("2026-06-14"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Eligibility:    ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "eligible now",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        let card = Paragraph::new(card_lines).block(
            Block::default()
                .title(" My Donor Card ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(card, body[0]);

        let items: Vec<ListItem> = self
            .nearby_requests
            .iter()
            .map(|(hospital, blood_type, urgency)| {
                let urgency_style = if *urgency == "urgent" {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {blood_type:<3}"), Style::default().fg(Color::Red)),
                    Span::raw(format!(" {hospital:<24}")),
                    Span::styled(*urgency, urgency_style),
                ]))
            })
            .collect();
        let requests = List::new(items).block(
            Block::default()
                .title(" Nearby Requests ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(requests, body[1]);

        let footer = Paragraph::new(" s SOS │ h Home │ Esc Back │ q Quit ")
            .style(Style::default().bg(Color::Red).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('s') => Some(Action::Navigate("/sos".to_string())),
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
        let mut page = DonorDashboard::default();
        assert_eq!(
            page.handle_event(key(KeyCode::Char('s'))),
            Some(Action::Navigate("/sos".into()))
        );
        assert_eq!(
            page.handle_event(key(KeyCode::Char('h'))),
            Some(Action::Navigate("/".into()))
        );
        assert_eq!(page.handle_event(key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(page.handle_event(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(page.handle_event(key(KeyCode::Char('x'))), None);
    }
}
