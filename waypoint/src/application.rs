//! Terminal application shell.
//!
//! Owns the [`NavigationState`] (the single location writer) and a
//! [`Router`], and drives one event loop: a location change re-resolves and
//! redraws; a terminal event goes to the active view, whose returned
//! [`Action`] is applied back to navigation state. Everything runs on one
//! task, so no two resolutions are ever in flight at once.

use crate::navigation::NavigationState;
use crate::route::{RenderResult, RouteTable, Router};
use crate::view::{Action, Event, View, ViewFactory};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;

pub struct Application {
    nav: NavigationState,
    router: Router,
    fallback: Option<ViewFactory>,
    fallback_view: Option<Box<dyn View>>,
}

impl Application {
    /// Create an application over the given table, starting at `initial`
    /// (normally the path the hosting environment was launched with).
    pub fn new(table: RouteTable, initial: impl Into<String>) -> Self {
        Self {
            nav: NavigationState::new(initial),
            router: Router::new(table),
            fallback: None,
            fallback_view: None,
        }
    }

    /// Register a view rendered whenever no route matches the location.
    /// Without one, a built-in placeholder is shown.
    pub fn with_fallback<V, F>(mut self, factory: F) -> Self
    where
        V: View + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(move || Box::new(factory())));
        self
    }

    /// The navigation state, e.g. for programmatic redirects before `run`.
    pub fn navigation(&mut self) -> &mut NavigationState {
        &mut self.nav
    }

    /// Run the application until the active view requests `Quit`.
    pub fn run(self) -> anyhow::Result<()> {
        let rt = Runtime::new()?;
        rt.block_on(self.run_loop())
    }

    async fn run_loop(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut locations = self.nav.subscribe();

        // Commit the initial location before the first draw.
        let initial = locations.borrow_and_update().clone();
        self.commit(&initial);
        self.draw(terminal)?;

        loop {
            tokio::select! {
                changed = locations.changed() => {
                    if changed.is_err() {
                        return Ok(());
                    }
                    // The watch channel holds only the latest value, so
                    // rapid navigations collapse to a single commit of the
                    // newest location.
                    let location = locations.borrow_and_update().clone();
                    self.commit(&location);
                    self.draw(terminal)?;
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        let raw = event::read()?;
                        let internal = match raw {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = internal {
                            match self.dispatch(event) {
                                Some(Action::Navigate(path)) => self.nav.navigate(path),
                                Some(Action::Back) => {
                                    self.nav.back();
                                }
                                Some(Action::Forward) => {
                                    self.nav.forward();
                                }
                                Some(Action::Quit) => {
                                    tracing::info!("quit requested");
                                    if let Some(view) = self.router.active_view() {
                                        view.on_exit();
                                    }
                                    return Ok(());
                                }
                                Some(Action::Noop) | None => {}
                            }
                            self.draw(terminal)?;
                        }
                    }
                }
            }
        }
    }

    fn commit(&mut self, location: &str) {
        let not_found = self.router.sync(location).is_not_found();
        if not_found && self.fallback_view.is_none() {
            if let Some(factory) = &self.fallback {
                self.fallback_view = Some(factory());
            }
        }
    }

    fn dispatch(&mut self, event: Event) -> Option<Action> {
        match self.router.active_mut() {
            RenderResult::Matched { view, .. } => view.handle_event(event),
            RenderResult::NotFound => match self.fallback_view.as_mut() {
                Some(view) => view.handle_event(event),
                // Keep a minimal keymap alive so the user is never stuck.
                None => match event {
                    Event::Key(key) => match key.code {
                        KeyCode::Char('q') => Some(Action::Quit),
                        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
                        _ => None,
                    },
                    _ => None,
                },
            },
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        let router = &mut self.router;
        let fallback_view = &mut self.fallback_view;
        terminal.draw(|frame| {
            let area = frame.area();
            match router.active_mut() {
                RenderResult::Matched { view, .. } => view.render(frame, area),
                RenderResult::NotFound => match fallback_view.as_mut() {
                    Some(view) => view.render(frame, area),
                    None => {
                        let placeholder = Paragraph::new("No route matched")
                            .alignment(Alignment::Center);
                        frame.render_widget(placeholder, area);
                    }
                },
            }
        })?;
        Ok(())
    }
}
