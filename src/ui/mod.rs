pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{widgets::Paragraph, Frame};
use styles::hint_style;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size());

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_timer_pane(f, app, layout.timer_area);
    render_list_pane(f, app, layout.list_area);
    render_input_form(f, app, layout.input_area);

    let status = Paragraph::new(format!(" {}", app.status_message)).style(hint_style());
    f.render_widget(status, layout.status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskList;
    use crate::timer::CountdownTimer;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_shows_clock_and_tasks() {
        let mut tasks = TaskList::new();
        tasks.add_task("Write report");
        let app = AppState::new(CountdownTimer::new(), tasks);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("25:00"));
        assert!(text.contains("IDLE"));
        assert!(text.contains("Write report"));
        assert!(text.contains("Tasks (1)"));
    }

    #[test]
    fn test_render_empty_list_hint() {
        let app = AppState::new(CountdownTimer::new(), TaskList::new());

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        assert!(screen_text(&terminal).contains("No tasks yet"));
    }
}
