use crate::domain::TimerState;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the clock digits and state badge
pub fn timer_state_style(state: TimerState) -> Style {
    match state {
        TimerState::Running => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        TimerState::Paused => Style::default().fg(Color::Yellow),
        TimerState::Idle => Style::default().fg(Color::Gray),
    }
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border style of the focused input line
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::LightBlue)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Session progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::LightBlue).bg(Color::DarkGray)
}
