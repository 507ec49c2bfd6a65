use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" Space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("a add   "),
            Span::raw("↑/↓ select   "),
            Span::raw("d delete   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Esc cancel   "),
            Span::raw("Ctrl+C quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
