//! Bar chart of the sequence
//!
//! Each value is a vertical bar whose height is proportional to the value,
//! drawn with eighth-block glyphs for sub-cell resolution. When there are
//! more values than columns, a column shows one representative of the
//! indices it covers: a highlighted index if there is one, else the tallest.

use crate::clock::{FrameView, Highlights};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};
use std::ops::Range;

const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Widget drawing one bar per value
pub struct Bars<'a> {
    values: &'a [u32],
    settled: &'a [bool],
    highlights: Highlights,
}

impl<'a> Bars<'a> {
    pub fn new(values: &'a [u32], settled: &'a [bool], highlights: Highlights) -> Self {
        Bars {
            values,
            settled,
            highlights,
        }
    }

    /// Settled beats highlighted beats plain
    fn style_for(&self, index: usize) -> Style {
        let color = if self.settled.get(index).copied().unwrap_or(false) {
            DEFAULT_THEME.bar_settled
        } else if self.highlights.contains(index) {
            DEFAULT_THEME.bar_highlight
        } else {
            DEFAULT_THEME.bar
        };
        Style::default().fg(color)
    }

    fn representative(&self, range: Range<usize>) -> usize {
        let start = range.start;
        range
            .clone()
            .find(|&i| self.highlights.contains(i))
            .or_else(|| range.max_by_key(|&i| self.values[i]))
            .unwrap_or(start)
    }

    fn draw_bar(&self, buf: &mut Buffer, area: Rect, x: u16, width: u16, index: usize, max: u32) {
        let height = area.height as u64;
        // At least one eighth so the smallest value stays visible
        let eighths = (self.values[index] as u64 * height * 8 / max as u64).max(1);
        let full = eighths / 8;
        let partial = (eighths % 8) as usize;
        let style = self.style_for(index);

        for row in 0..height {
            let glyph = if row < full {
                EIGHTHS[8]
            } else if row == full && partial > 0 {
                EIGHTHS[partial]
            } else {
                break;
            };
            let y = area.bottom() - 1 - row as u16;
            buf.set_string(x, y, glyph.repeat(width as usize), style);
        }
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let n = self.values.len();
        if n == 0 || area.is_empty() {
            return;
        }
        let max = self.values.iter().copied().max().unwrap_or(1).max(1);
        let width = area.width as usize;

        if n <= width {
            let bar_width = width / n;
            // Leave a gap between bars once they are wide enough
            let draw_width = if bar_width >= 3 { bar_width - 1 } else { bar_width };
            for index in 0..n {
                let x = area.x + (index * bar_width) as u16;
                self.draw_bar(buf, area, x, draw_width as u16, index, max);
            }
        } else {
            for column in 0..width {
                let start = column * n / width;
                let end = ((column + 1) * n / width).clamp(start + 1, n);
                let index = self.representative(start..end);
                self.draw_bar(buf, area, area.x + column as u16, 1, index, max);
            }
        }
    }
}

/// Render the bar pane for `view`
pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: &FrameView<'_>, is_running: bool) {
    let border_style = if is_running {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} Sort ", view.settings.algorithm))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(DEFAULT_THEME.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Bars::new(
            view.sequence.values(),
            view.sequence.settled(),
            view.highlights,
        ),
        inner,
    );
}
