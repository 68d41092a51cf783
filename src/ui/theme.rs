use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub bar: Color,
    pub bar_settled: Color,
    pub bar_highlight: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub button_bg: Color,
    pub button_hover: Color,
    pub button_active: Color, // Selected algorithm
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(16, 16, 16),
    fg: Color::Rgb(230, 230, 230),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(80, 180, 220),
    bar_settled: Color::Rgb(80, 220, 120),
    bar_highlight: Color::Rgb(255, 80, 80),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border while running
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(30, 30, 30),
    button_bg: Color::Rgb(30, 30, 30),
    button_hover: Color::Rgb(50, 30, 30),
    button_active: Color::Rgb(137, 180, 250),
};
