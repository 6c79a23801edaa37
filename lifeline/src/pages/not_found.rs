use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use waypoint::{Action, Event, View};

/// Fallback page rendered when no route matches the location.
#[derive(Default)]
pub struct NotFoundPage;

impl View for NotFoundPage {
    fn title(&self) -> &str {
        "Not Found"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let message = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                "Nothing here.",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                "The page you are looking for does not exist.",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[0]);

        let footer = Paragraph::new(" h Home │ Esc Back │ q Quit ")
            .style(Style::default().bg(Color::Red).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('h') | KeyCode::Enter => Some(Action::Navigate("/".to_string())),
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
    fn home_and_back_are_always_reachable() {
        let mut page = NotFoundPage;
        assert_eq!(
            page.handle_event(key(KeyCode::Char('h'))),
            Some(Action::Navigate("/".into()))
        );
        assert_eq!(page.handle_event(key(KeyCode::Esc)), Some(Action::Back));
    }
}
