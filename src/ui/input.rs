//! Keyboard and mouse mapping
//!
//! Turns crossterm events into [`Command`]s for the run controller, or into
//! hover updates for the toolbar. The same mapping is used between runs and
//! inside the stepping clock; what a command is allowed to do depends on who
//! receives it.

use crate::algorithms::Algorithm;
use crate::config::{DELAY_STEP_MS, SIZE_STEP};
use crate::controller::Command;
use crate::ui::panes::{hit_test, ToolButton};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;

/// Where terminal events come from
pub trait EventSource {
    /// Wait up to `timeout` for an event to become available
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, through crossterm
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }
}

/// What an input event means to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Mouse moved; the button under it, if any
    Hover(Option<ToolButton>),
    Ignored,
}

/// Map one event, using the toolbar layout from the last frame for clicks
pub fn translate(event: &Event, toolbar: &[(ToolButton, Rect)]) -> Input {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_command(key).map_or(Input::Ignored, Input::Command)
        }
        Event::Mouse(mouse) => mouse_input(mouse, toolbar),
        _ => Input::Ignored,
    }
}

fn key_command(key: &KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Esc | KeyCode::Char('s') => Command::Cancel,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Start,
        KeyCode::Char('r') => Command::Regenerate,
        KeyCode::Char('[') => Command::Resize(-SIZE_STEP),
        KeyCode::Char(']') => Command::Resize(SIZE_STEP),
        KeyCode::Char('-') => Command::ChangeDelay(-DELAY_STEP_MS),
        KeyCode::Char('+') | KeyCode::Char('=') => Command::ChangeDelay(DELAY_STEP_MS),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Command::Select(Algorithm::ALL[index])
        }
        _ => return None,
    };
    Some(command)
}

fn mouse_input(mouse: &MouseEvent, toolbar: &[(ToolButton, Rect)]) -> Input {
    let button = hit_test(toolbar, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => Input::Hover(button),
        MouseEventKind::Down(MouseButton::Left) => {
            button.map_or(Input::Ignored, |b| Input::Command(b.command()))
        }
        _ => Input::Ignored,
    }
}
