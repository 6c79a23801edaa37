use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use waypoint::{Action, Event, View};

/// Landing page: pick a destination.
pub struct IndexPage {
    selected: usize,
    entries: Vec<(&'static str, &'static str, &'static str)>, // (label, description, path)
}

impl Default for IndexPage {
    fn default() -> Self {
        Self {
            selected: 0,
            entries: vec![
                (
                    "Donor Dashboard",
                    "Your donor card, eligibility & nearby requests",
                    "/donor-dashboard",
                ),
                (
                    "Hospital Dashboard",
                    "Blood stock levels & open requests",
                    "/hospital-dashboard",
                ),
                (
                    "Emergency SOS",
                    "Broadcast an urgent blood request",
                    "/sos",
                ),
            ],
        }
    }
}

impl View for IndexPage {
    fn title(&self) -> &str {
        "Community Blood Network"
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

        let header = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                "COMMUNITY BLOOD NETWORK",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled("Donate blood. Save lives.", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (label, desc, _))| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▶ " } else { "  " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            prefix,
                            Style::default().fg(if is_selected {
                                Color::Red
                            } else {
                                Color::DarkGray
                            }),
                        ),
                        Span::styled(
                            *label,
                            Style::default()
                                .fg(if is_selected { Color::Red } else { Color::White })
                                .add_modifier(if is_selected {
                                    Modifier::BOLD
                                } else {
                                    Modifier::empty()
                                }),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(*desc, Style::default().fg(Color::DarkGray)),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Where to? ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(list, chunks[1]);

        let footer = Paragraph::new(" ↑/↓ Select │ Enter Open │ q Quit ")
            .style(Style::default().bg(Color::Red).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = if self.selected == 0 {
                        self.entries.len() - 1
                    } else {
                        self.selected - 1
                    };
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1) % self.entries.len();
                    None
                }
                KeyCode::Enter => {
                    let (_, _, path) = self.entries[self.selected];
                    Some(Action::Navigate(path.to_string()))
                }
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
    fn enter_navigates_to_the_selected_destination() {
        let mut page = IndexPage::default();
        assert_eq!(
            page.handle_event(key(KeyCode::Enter)),
            Some(Action::Navigate("/donor-dashboard".into()))
        );

        page.handle_event(key(KeyCode::Down));
        page.handle_event(key(KeyCode::Down));
        assert_eq!(
            page.handle_event(key(KeyCode::Enter)),
            Some(Action::Navigate("/sos".into()))
        );
    }

    #[test]
    fn selection_wraps_around() {
        let mut page = IndexPage::default();
        page.handle_event(key(KeyCode::Up));
        assert_eq!(
            page.handle_event(key(KeyCode::Enter)),
            Some(Action::Navigate("/sos".into()))
        );
    }

    #[test]
    fn q_quits() {
        let mut page = IndexPage::default();
        assert_eq!(page.handle_event(key(KeyCode::Char('q'))), Some(Action::Quit));
    }
}
