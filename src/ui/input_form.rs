use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, focused_border_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the single-line "New task" input
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::AddingTask;

    let line = if editing {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.draft.as_str(), title_style()),
            Span::styled("█", title_style()), // Cursor
        ])
    } else if app.draft.is_empty() {
        Line::styled("Press a to type a new task", hint_style())
    } else {
        Line::from(vec![Span::raw("> "), Span::raw(app.draft.as_str())])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if editing {
            focused_border_style()
        } else {
            border_style()
        })
        .title(" New task ");

    f.render_widget(Paragraph::new(line).block(block), area);
}
