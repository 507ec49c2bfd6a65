use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, default_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the task list; the selection scrolls into view on long lists
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let title = format!(" Tasks ({}) ", app.tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.tasks.is_empty() {
        let hint = Paragraph::new(Line::styled(" No tasks yet. Press a to add one.", hint_style()))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| ListItem::new(Line::from(format!(" {:>2}. {}", i + 1, task))))
        .collect();

    // Only highlight while the list has focus
    let highlight = if app.ui_mode == UiMode::Normal {
        selected_style()
    } else {
        default_style()
    };

    let list = List::new(items)
        .block(block)
        .style(default_style())
        .highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}
