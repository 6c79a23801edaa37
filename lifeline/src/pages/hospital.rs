use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Row, Table};
use waypoint::{Action, Event, View};

/// Hospital view: blood stock levels and open requests.
pub struct HospitalDashboard {
    stock: Vec<(&'static str, u32, &'static str)>, // (blood type, units, status)
    open_requests: Vec<&'static str>,
}

impl Default for HospitalDashboard {
    fn default() -> Self {
        Self {
            stock: vec![
                ("O-", 3, "critical"),
                ("O+", 18, "ok"),
                ("A-", 6, "low"),
                ("A+", 24, "ok"),
                ("B-", 4, "low"),
                ("B+", 12, "ok"),
                ("AB-", 2, "critical"),
                ("AB+", 9, "ok"),
            ],
            open_requests: vec![
                "O- x4 for surgery, theatre 2, today",
                "AB- x2 standing order, oncology",
                "A- x3 restock, expires Friday",
            ],
        }
    }
}

fn status_style(status: &str) -> Style {
    match status {
        "critical" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        "low" => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Green),
    }
}

impl View for HospitalDashboard {
    fn title(&self) -> &str {
        "Hospital Dashboard"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let rows: Vec<Row> = self
            .stock
            .iter()
            .map(|(blood_type, units, status)| {
                Row::new(vec![
                    Line::styled(*blood_type, Style::default().fg(Color::Red)),
                    Line::raw(units.to_string()),
                    Line::styled(*status, status_style(status)),
                ])
            })
            .collect();
        let stock = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(8),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec!["Type", "Units", "Status"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(" Blood Stock ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(stock, body[0]);

        let items: Vec<ListItem> = self
            .open_requests
            .iter()
            .map(|request| {
                ListItem::new(Line::from(vec![
                    Span::styled(" • ", Style::default().fg(Color::Red)),
                    Span::raw(*request),
                ]))
            })
            .collect();
        let requests = List::new(items).block(
            Block::default()
                .title(" Open Requests ")
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
