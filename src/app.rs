//! Main Application
//!
//! The App struct manages the TUI lifecycle:
//! - Event loop (keyboard events, countdown tick, animation frames)
//! - TaskStore for all task and input state
//! - Rendering: header with countdown, task list, input field, key hints
//!
//! # Interaction model
//!
//! Two modes. Normal mode navigates and operates on the list; insert mode
//! types into the pending input. The store itself never sees modes, only
//! discrete [`Action`]s.

use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph};
use ratatui::{Frame, Terminal};
use tokio::time::MissedTickBehavior;
use unicode_width::UnicodeWidthChar;

use crate::countdown;
use crate::effects::{self, Fade};
use crate::tasks::{self, Action, TaskStore};
use crate::theme;

/// Which part of the screen owns the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Navigating the task list
    Normal,
    /// Typing into the pending input
    Insert,
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// All task and input state
    store: TaskStore,
    /// Keyboard focus
    mode: Mode,

    // === Display State ===
    /// List selection for normal-mode navigation
    list_state: ListState,
    /// Countdown string for the header, refreshed once a second
    countdown: String,
    /// Check-mark fade, restarted on every toggle
    check_fade: Option<Fade>,
}

impl App {
    /// Create a new App with an empty task list.
    pub fn new() -> Self {
        Self {
            running: true,
            store: TaskStore::new(),
            mode: Mode::Normal,
            list_state: ListState::default(),
            countdown: countdown::reset_countdown(Local::now().naive_local()),
            check_fade: None,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~10 FPS is plenty for a 500ms fade
        let frame_duration = Duration::from_millis(100);

        let mut event_stream = EventStream::new();

        // Countdown clock. Owned by this loop, dropped when it returns, so
        // teardown is deterministic. Each tick recomputes from absolute time,
        // so a missed tick never accumulates drift.
        let mut clock = tokio::time::interval(Duration::from_secs(1));
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::debug!("event loop started");
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        // Only handle Press events (not Release or Repeat)
                        if let Event::Key(key) = event {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key(key);
                            }
                        }
                    }
                }

                _ = clock.tick() => {
                    self.countdown = countdown::reset_countdown(Local::now().naive_local());
                }

                // Frame tick - keeps the fade animating between events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            self.render(terminal)?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        tracing::debug!("event loop stopped");
        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.mode {
            Mode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }

                KeyCode::Char('j') | KeyCode::Down => self.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.select_prev(),

                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Some(id) = self.selected_id() {
                        self.dispatch(Action::Toggle(id));
                    }
                }

                KeyCode::Char('e') => {
                    if let Some(id) = self.selected_id() {
                        self.dispatch(Action::StartEdit(id));
                        self.mode = Mode::Insert;
                    }
                }

                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = self.selected_id() {
                        self.dispatch(Action::Delete(id));
                        self.clamp_selection();
                    }
                }

                KeyCode::Char('i') | KeyCode::Char('a') => {
                    self.mode = Mode::Insert;
                }

                _ => {}
            },

            Mode::Insert => match key.code {
                KeyCode::Esc => {
                    self.dispatch(Action::CancelEdit);
                    self.mode = Mode::Normal;
                }

                KeyCode::Enter => {
                    self.dispatch(Action::Submit);
                    // A no-op submit (whitespace input) keeps the field focused
                    if self.store.input().is_empty() {
                        self.mode = Mode::Normal;
                    }
                }

                KeyCode::Backspace => self.dispatch(Action::InputBackspace),
                KeyCode::Char(c) => self.dispatch(Action::InputChar(c)),

                _ => {}
            },
        }
    }

    /// Apply an action to the store, restarting the check-mark fade when a
    /// toggle actually landed on a task.
    fn dispatch(&mut self, action: Action) {
        let is_toggle = matches!(action, Action::Toggle(_));
        let changed = self.store.apply(action);
        if is_toggle && changed {
            self.check_fade = Some(Fade::new(effects::CHECK_FADE));
        }
    }

    // === Selection ===

    fn selected_id(&self) -> Option<String> {
        self.list_state
            .selected()
            .and_then(|i| self.store.tasks().get(i))
            .map(|t| t.id.clone())
    }

    fn select_next(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(prev));
    }

    /// Keep the selection inside the list after a delete.
    fn clamp_selection(&mut self) {
        let len = self.store.tasks().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    // === Rendering ===

    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| self.draw(frame))?;
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::new().style(Style::new().bg(theme::BACKGROUND)), area);

        let [header, list_area, input_area, status] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area);

        self.draw_header(frame, header);
        self.draw_list(frame, list_area);
        self.draw_input(frame, input_area);
        self.draw_status(frame, status);
    }

    /// Centered title and the reset countdown
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::raw(""),
            Line::styled(
                "Today",
                Style::new().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )
            .centered(),
            Line::styled(
                format!("Tasks will reset in {}", self.countdown),
                Style::new().fg(theme::SUBTITLE),
            )
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_list(&mut self, frame: &mut Frame, area: Rect) {
        let area = area.inner(Margin::new(2, 0));

        if self.store.tasks().is_empty() {
            let empty = Line::styled(
                "No tasks yet - press i to add one",
                Style::new().fg(theme::SUBTITLE),
            )
            .centered();
            frame.render_widget(Paragraph::new(empty), area);
            return;
        }

        let rows = tasks::task_rows(self.store.tasks(), self.check_fade.as_ref(), area.width);
        let list = List::new(rows)
            .highlight_symbol("\u{203a} ")
            .highlight_style(Style::new().fg(theme::ACCENT).add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Input field under a top border
    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(Style::new().fg(theme::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let line = match self.mode {
            Mode::Insert => {
                let budget = (inner.width as usize).saturating_sub(4);
                let tail = input_tail(self.store.input(), budget);
                Line::from(vec![
                    Span::styled("> ", Style::new().fg(theme::ACCENT)),
                    Span::styled(tail, Style::new().fg(theme::TEXT)),
                    Span::styled("_", Style::new().fg(theme::TEXT)),
                ])
            }
            Mode::Normal => Line::styled("Add a task", Style::new().fg(theme::PLACEHOLDER)),
        };
        frame.render_widget(Paragraph::new(line), inner);
    }

    /// Key hints for the current mode
    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let status = match self.mode {
            Mode::Normal => {
                let open = self
                    .store
                    .tasks()
                    .iter()
                    .filter(|t| !t.completed)
                    .count();
                format!(" {open} open | Space toggle | e edit | d delete | i new | q quit")
            }
            Mode::Insert if self.store.is_editing() => {
                " editing | Enter save | Esc cancel".to_string()
            }
            Mode::Insert => " Enter add | Esc cancel".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Line::styled(status, Style::new().fg(theme::SUBTITLE))),
            area,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// The suffix of `input` that fits in `width` terminal columns, so a long
/// pending input keeps its cursor end visible.
fn input_tail(input: &str, width: usize) -> String {
    let mut cols = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in input.chars().rev() {
        let w = c.width().unwrap_or(0);
        if cols + w > width {
            break;
        }
        cols += w;
        kept.push(c);
    }
    kept.iter().rev().collect()
}
