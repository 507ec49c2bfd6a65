use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub async fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits, even while typing
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key).await,
        UiMode::AddingTask => handle_input_mode(app, key),
    }
}

/// Handle keys in normal mode
async fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Start / pause / resume
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_timer().await;
            Ok(false)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer().await;
            Ok(false)
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // New task
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') => {
            app.start_add_task();
            Ok(false)
        }

        // Remove selected task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Chords are not text
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return Ok(false);
    }

    match key.code {
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Esc => app.cancel_draft(),
        KeyCode::Backspace => app.draft_backspace(),
        KeyCode::Char(c) => app.draft_add_char(c),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskList, TimerState};
    use crate::timer::CountdownTimer;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        let mut tasks = TaskList::new();
        tasks.add_task("Test task");
        AppState::new(CountdownTimer::new(), tasks)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[tokio::test]
    async fn test_handle_navigation() {
        let mut app = create_test_app();
        app.tasks.add_task("Task 2");

        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down)).await.unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up)).await.unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[tokio::test]
    async fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).await.unwrap();
        assert!(should_quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.ui_mode = UiMode::AddingTask;
        assert!(handle_key(&mut app, ctrl_c).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_space_toggles_timer() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char(' '))).await.unwrap();
        assert_eq!(app.timer_view.state, TimerState::Running);

        handle_key(&mut app, key(KeyCode::Char(' '))).await.unwrap();
        assert_eq!(app.timer_view.state, TimerState::Paused);

        handle_key(&mut app, key(KeyCode::Char('r'))).await.unwrap();
        assert_eq!(app.timer_view.state, TimerState::Idle);
        assert_eq!(app.timer_view.remaining_seconds, 1500);
    }

    #[tokio::test]
    async fn test_typing_a_task() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('a'))).await.unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // Letters that are shortcuts in normal mode are plain text here
        for c in " qsr ".chars() {
            let quit = handle_key(&mut app, key(KeyCode::Char(c))).await.unwrap();
            assert!(!quit);
        }
        handle_key(&mut app, key(KeyCode::Backspace)).await.unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.get(1), Some("qsr"));
        assert_eq!(app.timer_view.state, TimerState::Idle);
    }

    #[tokio::test]
    async fn test_modified_keys_do_not_type() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).await.unwrap();
        handle_key(&mut app, key(KeyCode::Char('x'))).await.unwrap();

        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        let alt_b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT);
        assert!(!handle_key(&mut app, ctrl_w).await.unwrap());
        assert!(!handle_key(&mut app, alt_b).await.unwrap());
        assert_eq!(app.draft, "x");

        // Shift still types capitals
        let shift_y = KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT);
        handle_key(&mut app, shift_y).await.unwrap();
        assert_eq!(app.draft, "xY");
    }

    #[tokio::test]
    async fn test_blank_enter_keeps_editing() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).await.unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert_eq!(app.tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_escape_cancels_input() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).await.unwrap();
        handle_key(&mut app, key(KeyCode::Char('z'))).await.unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).await.unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.draft, "z");
    }

    #[tokio::test]
    async fn test_delete_key_removes_task() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Delete)).await.unwrap();
        assert!(app.tasks.is_empty());
    }
}
