use crate::domain::{TaskList, UiMode};
use crate::timer::{CountdownTimer, TimerSnapshot};
use tracing::{info, warn};

/// Main application state
pub struct AppState {
    pub timer: CountdownTimer,
    pub timer_view: TimerSnapshot, // Last snapshot seen by the render loop
    pub tasks: TaskList,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub draft: String, // New-task input line
    pub status_message: String,
}

impl AppState {
    pub fn new(timer: CountdownTimer, tasks: TaskList) -> Self {
        let timer_view = timer.snapshot();
        Self {
            timer,
            timer_view,
            tasks,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            draft: String::new(),
            status_message: String::new(),
        }
    }

    /// Pull the latest timer state for the next render pass
    pub fn refresh_timer_view(&mut self) {
        self.timer_view = self.timer.snapshot();
    }

    pub async fn toggle_timer(&mut self) {
        self.timer.toggle().await;
        self.refresh_timer_view();
        self.status_message = format!("Timer {}", self.timer_view.state.to_tag().to_lowercase());
    }

    pub async fn reset_timer(&mut self) {
        self.timer.reset().await;
        self.refresh_timer_view();
        self.status_message = "Timer reset".to_string();
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn start_add_task(&mut self) {
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn draft_add_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn draft_backspace(&mut self) {
        self.draft.pop();
    }

    /// Submit the draft as a new task. Blank drafts are ignored and editing continues.
    pub fn submit_draft(&mut self) {
        if self.tasks.add_task(&self.draft) {
            info!(count = self.tasks.len(), "task added");
            self.draft.clear();
            self.selected_index = self.tasks.len() - 1;
            self.status_message = "Task added".to_string();
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_draft(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Remove the task under the cursor
    pub fn delete_selected(&mut self) {
        match self.tasks.remove_task_at(self.selected_index) {
            Ok(removed) => {
                info!(index = self.selected_index, "task removed");
                self.status_message = format!("Removed \"{}\"", removed);
                self.clamp_selection();
            }
            Err(err) => {
                warn!(error = %err, "remove task failed");
                self.status_message = err.to_string();
            }
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    /// Stop the countdown before the session goes away
    pub async fn shutdown(&mut self) {
        self.timer.shutdown().await;
    }
}
