//! Stats line under the toolbar

use crate::clock::FrameView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// `Algo: Bubble  Size: 100  Speed(ms): 10  Comparisons: 0  Swaps: 0`
pub fn stats_text(view: &FrameView<'_>) -> String {
    let counters = view.sequence.counters();
    format!(
        "Algo: {}  Size: {}  Speed(ms): {}  Comparisons: {}  Swaps: {}",
        view.settings.algorithm,
        view.sequence.len(),
        view.settings.delay_ms(),
        counters.comparisons,
        counters.swaps
    )
}

pub fn render_stats_line(frame: &mut Frame, area: Rect, view: &FrameView<'_>) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            stats_text(view),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
