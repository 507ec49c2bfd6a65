use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the timer pane including borders
const TIMER_PANE_HEIGHT: u16 = 9;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub list_area: Rect,
    pub input_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Timer pane: clock, state and progress
/// - Task list: takes the remaining height
/// - New-task input (3 rows) and status line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Keybindings bar
            Constraint::Length(TIMER_PANE_HEIGHT), // Timer
            Constraint::Min(3),                    // Task list
            Constraint::Length(3),                 // New task input
            Constraint::Length(1),                 // Status
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        timer_area: chunks[1],
        list_area: chunks[2],
        input_area: chunks[3],
        status_area: chunks[4],
    }
}
