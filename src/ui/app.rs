//! Main TUI application state and logic

use crate::clock::{pace, FrameView, Highlights, Signal, StepClock};
use crate::controller::{Command, RunController, RunState};
use crate::ui::input::{self, CrosstermEvents, EventSource, Input};
use crate::ui::panes::{self, ToolButton};
use crossterm::event::Event;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Idle redraw cadence
const IDLE_POLL: Duration = Duration::from_millis(10);

/// UI state that lives outside the controller
#[derive(Debug, Default)]
pub struct ViewState {
    /// Button under the mouse pointer
    pub hover: Option<ToolButton>,

    /// Where each toolbar button was drawn in the last frame
    pub toolbar: Vec<(ToolButton, Rect)>,

    /// Status message to display
    pub status_message: String,
}

/// The main application state
pub struct App {
    pub controller: RunController,
    pub view: ViewState,
}

impl App {
    pub fn new(controller: RunController) -> Self {
        App {
            controller,
            view: ViewState {
                status_message: String::from("Ready! Pick an algorithm and press Enter"),
                ..ViewState::default()
            },
        }
    }

    /// Run the TUI application until quit
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.run_with(terminal, &mut CrosstermEvents)
    }

    /// Run until quit, reading input from `events`
    pub fn run_with<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> io::Result<()> {
        loop {
            let frame_view = FrameView {
                sequence: self.controller.sequence(),
                highlights: Highlights::NONE,
                settings: self.controller.settings(),
            };
            let state = self.controller.state();
            terminal.draw(|f| draw(f, &frame_view, &mut self.view, state))?;

            if self.controller.is_quit() {
                break;
            }

            if events.poll(IDLE_POLL)? {
                let event = events.read()?;
                match input::translate(&event, &self.view.toolbar) {
                    Input::Command(command) => self.dispatch(command, terminal, events)?,
                    Input::Hover(button) => self.view.hover = button,
                    Input::Ignored => {}
                }
            }
        }

        Ok(())
    }

    /// Hand a command to the controller and report the outcome
    fn dispatch<B: Backend, E: EventSource>(
        &mut self,
        command: Command,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> io::Result<()> {
        let mut clock = TerminalClock::new(terminal, &mut self.view, events);
        let result = self.controller.apply(command, &mut clock);
        let failure = clock.take_error();

        if let Some(err) = failure {
            return Err(err);
        }

        self.view.status_message = match result {
            Ok(state) => self.describe(command, state),
            Err(e) => format!("Cannot do that: {}", e),
        };
        Ok(())
    }

    fn describe(&self, command: Command, state: RunState) -> String {
        let settings = self.controller.settings();
        let counters = self.controller.sequence().counters();
        match (command, state) {
            (Command::Start, RunState::Completed) => format!(
                "{} sort finished: {} comparisons, {} swaps",
                settings.algorithm, counters.comparisons, counters.swaps
            ),
            (Command::Start, RunState::Cancelled) => {
                "Stopped. Shuffle or resize to run again".to_string()
            }
            (Command::Select(algorithm), _) => format!("Selected {} sort", algorithm),
            (Command::Regenerate, _) => format!("Shuffled {} values", self.controller.sequence().len()),
            (Command::Resize(_), _) => format!("Size {}", settings.size()),
            (Command::ChangeDelay(_), _) => format!("Delay {} ms per step", settings.delay_ms()),
            (Command::Cancel, _) => "Nothing to stop".to_string(),
            _ => self.view.status_message.clone(),
        }
    }
}

/// Lay out and render one frame
fn draw(frame: &mut Frame, view: &FrameView<'_>, ui: &mut ViewState, state: RunState) {
    let size = frame.area();
    let toolbar_rows = panes::toolbar_height(size.width);

    // Toolbar, stats line, bars, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(toolbar_rows),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let is_running = state == RunState::Running;
    ui.toolbar = panes::render_toolbar(
        frame,
        chunks[0],
        ui.hover,
        view.settings.algorithm,
        is_running,
    );
    panes::render_stats_line(frame, chunks[1], view);
    panes::render_bars_pane(frame, chunks[2], view, is_running);
    panes::render_status_bar(frame, chunks[3], &ui.status_message, state);
}

/// Stepping clock backed by the real terminal
///
/// Draws every step, then polls `events` for the rest of the step delay.
/// Cancel and quit are latched until the next run starts. A terminal error
/// is kept for the caller and reported as quit so the engine unwinds.
pub struct TerminalClock<'a, B: Backend, E: EventSource> {
    terminal: &'a mut Terminal<B>,
    ui: &'a mut ViewState,
    events: &'a mut E,
    latched: Signal,
    error: Option<io::Error>,
}

impl<'a, B: Backend, E: EventSource> TerminalClock<'a, B, E> {
    pub fn new(terminal: &'a mut Terminal<B>, ui: &'a mut ViewState, events: &'a mut E) -> Self {
        TerminalClock {
            terminal,
            ui,
            events,
            latched: Signal::NONE,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn fail(&mut self, err: io::Error) -> Signal {
        tracing::error!(target: "ui", error = %err, "terminal failure during run");
        self.error = Some(err);
        self.latched.quit = true;
        self.latched
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending
    fn drain(&mut self, timeout: Duration) -> Signal {
        let mut wait = timeout;
        loop {
            match self.events.poll(wait) {
                Ok(true) => match self.events.read() {
                    Ok(event) => self.observe(&event),
                    Err(err) => return self.fail(err),
                },
                Ok(false) => break,
                Err(err) => return self.fail(err),
            }
            if self.latched.is_interrupt() {
                break;
            }
            wait = Duration::ZERO;
        }
        self.latched
    }

    /// Only quit, cancel and hover matter while a run is in progress
    fn observe(&mut self, event: &Event) {
        match input::translate(event, &self.ui.toolbar) {
            Input::Command(Command::Quit) => self.latched.quit = true,
            Input::Command(Command::Cancel) => self.latched.cancel = true,
            Input::Hover(button) => self.ui.hover = button,
            Input::Command(other) => {
                tracing::trace!(target: "ui", command = ?other, "ignored during run");
            }
            Input::Ignored => {}
        }
    }
}

impl<B: Backend, E: EventSource> StepClock for TerminalClock<'_, B, E> {
    fn step(&mut self, view: &FrameView<'_>) -> Signal {
        let ui = &mut *self.ui;
        let drawn = self
            .terminal
            .draw(|f| draw(f, view, ui, RunState::Running))
            .map(|_| ());
        if let Err(err) = drawn {
            return self.fail(err);
        }

        pace(view.settings.delay(), |remaining| self.drain(remaining))
    }

    fn begin_run(&mut self) {
        self.latched.cancel = false;
        self.ui.status_message = String::from("Sorting...");
    }
}
