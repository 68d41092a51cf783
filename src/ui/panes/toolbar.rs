//! Toolbar buttons: layout, hit-testing and rendering

use crate::algorithms::Algorithm;
use crate::config::{DELAY_STEP_MS, SIZE_STEP};
use crate::controller::Command;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One clickable toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolButton {
    Algorithm(Algorithm),
    Shuffle,
    SizeDown,
    SizeUp,
    SpeedDown,
    SpeedUp,
    Start,
    Stop,
}

/// Buttons in display order
pub const BUTTONS: [ToolButton; 12] = [
    ToolButton::Algorithm(Algorithm::Bubble),
    ToolButton::Algorithm(Algorithm::Insertion),
    ToolButton::Algorithm(Algorithm::Selection),
    ToolButton::Algorithm(Algorithm::Merge),
    ToolButton::Algorithm(Algorithm::Quick),
    ToolButton::Shuffle,
    ToolButton::SizeDown,
    ToolButton::SizeUp,
    ToolButton::SpeedDown,
    ToolButton::SpeedUp,
    ToolButton::Start,
    ToolButton::Stop,
];

impl ToolButton {
    pub fn label(self) -> &'static str {
        match self {
            ToolButton::Algorithm(algorithm) => algorithm.name(),
            ToolButton::Shuffle => "Shuffle",
            ToolButton::SizeDown => "Size -",
            ToolButton::SizeUp => "Size +",
            ToolButton::SpeedDown => "Speed -",
            ToolButton::SpeedUp => "Speed +",
            ToolButton::Start => "Start",
            ToolButton::Stop => "Stop",
        }
    }

    /// Keyboard shortcut shown in front of the label
    pub fn key_hint(self) -> &'static str {
        match self {
            ToolButton::Algorithm(Algorithm::Bubble) => "1",
            ToolButton::Algorithm(Algorithm::Insertion) => "2",
            ToolButton::Algorithm(Algorithm::Selection) => "3",
            ToolButton::Algorithm(Algorithm::Merge) => "4",
            ToolButton::Algorithm(Algorithm::Quick) => "5",
            ToolButton::Shuffle => "r",
            ToolButton::SizeDown => "[",
            ToolButton::SizeUp => "]",
            ToolButton::SpeedDown => "-",
            ToolButton::SpeedUp => "+",
            ToolButton::Start => "↵",
            ToolButton::Stop => "esc",
        }
    }

    pub fn command(self) -> Command {
        match self {
            ToolButton::Algorithm(algorithm) => Command::Select(algorithm),
            ToolButton::Shuffle => Command::Regenerate,
            ToolButton::SizeDown => Command::Resize(-SIZE_STEP),
            ToolButton::SizeUp => Command::Resize(SIZE_STEP),
            ToolButton::SpeedDown => Command::ChangeDelay(-DELAY_STEP_MS),
            ToolButton::SpeedUp => Command::ChangeDelay(DELAY_STEP_MS),
            ToolButton::Start => Command::Start,
            ToolButton::Stop => Command::Cancel,
        }
    }

    /// Rendered width: " key label "
    fn width(self) -> u16 {
        (self.key_hint().chars().count() + self.label().chars().count() + 3) as u16
    }
}

/// Place the buttons left to right, wrapping onto new rows when full
///
/// Rows below `area` are still laid out; [`toolbar_height`] uses that to
/// size the toolbar before rendering.
pub fn layout_buttons(area: Rect) -> Vec<(ToolButton, Rect)> {
    let left = area.x.saturating_add(1);
    let right = area.x.saturating_add(area.width);
    let mut x = left;
    let mut y = area.y;
    let mut placed = Vec::with_capacity(BUTTONS.len());

    for button in BUTTONS {
        let width = button.width();
        if x > left && x.saturating_add(width) > right {
            x = left;
            y = y.saturating_add(1);
        }
        placed.push((button, Rect::new(x, y, width, 1)));
        x = x.saturating_add(width + 1);
    }

    placed
}

/// Rows needed to show every button at `width` columns
pub fn toolbar_height(width: u16) -> u16 {
    let unbounded = Rect {
        x: 0,
        y: 0,
        width,
        height: u16::MAX,
    };
    layout_buttons(unbounded)
        .last()
        .map(|(_, rect)| rect.y + 1)
        .unwrap_or(1)
}

/// Find the button under a terminal cell
pub fn hit_test(buttons: &[(ToolButton, Rect)], column: u16, row: u16) -> Option<ToolButton> {
    buttons
        .iter()
        .find(|(_, r)| column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height)
        .map(|(button, _)| *button)
}

/// Render the toolbar and return where each button landed
pub fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    hover: Option<ToolButton>,
    selected: Algorithm,
    is_running: bool,
) -> Vec<(ToolButton, Rect)> {
    let buttons = layout_buttons(area);

    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(DEFAULT_THEME.current_line_bg)),
        area,
    );

    for (button, rect) in &buttons {
        let visible = rect.intersection(area);
        if visible.is_empty() {
            continue;
        }

        let active = *button == ToolButton::Algorithm(selected);
        // While running only Stop does anything
        let enabled = !is_running || *button == ToolButton::Stop;

        let bg = if active {
            DEFAULT_THEME.button_active
        } else if hover == Some(*button) && enabled {
            DEFAULT_THEME.button_hover
        } else {
            DEFAULT_THEME.button_bg
        };
        let fg = if active {
            Color::Black
        } else if enabled {
            DEFAULT_THEME.fg
        } else {
            DEFAULT_THEME.comment
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {}", button.key_hint()),
                Style::default().bg(bg).fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                format!(" {} ", button.label()),
                Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), visible);
    }

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_fits_one_row() {
        let placed = layout_buttons(Rect::new(0, 0, 200, 3));
        assert_eq!(placed.len(), 12);
        assert!(placed.iter().all(|(_, r)| r.y == 0));
        assert_eq!(toolbar_height(200), 1);
    }

    #[test]
    fn narrow_terminal_wraps() {
        let height = toolbar_height(40);
        assert!(height > 1);
        let placed = layout_buttons(Rect::new(0, 0, 40, height));
        for (_, rect) in &placed {
            assert!(rect.x + rect.width <= 40);
        }
    }

    #[test]
    fn hit_test_finds_buttons() {
        let placed = layout_buttons(Rect::new(0, 0, 200, 1));
        let (button, rect) = placed[3];
        assert_eq!(hit_test(&placed, rect.x, rect.y), Some(button));
        assert_eq!(hit_test(&placed, rect.x + rect.width - 1, 0), Some(button));
        assert_eq!(hit_test(&placed, 0, 0), None);
        assert_eq!(hit_test(&placed, rect.x, 5), None);
    }

    #[test]
    fn stop_cancels() {
        assert_eq!(ToolButton::Stop.command(), Command::Cancel);
        assert_eq!(
            ToolButton::Algorithm(Algorithm::Merge).command(),
            Command::Select(Algorithm::Merge)
        );
    }
}
