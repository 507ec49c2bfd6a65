use thiserror::Error;

/// Errors raised by task list mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskListError {
    #[error("task index {index} is out of range (list has {len} tasks)")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered list of free-text tasks, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<String>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` trimmed. Blank input is ignored.
    ///
    /// Returns whether the list changed.
    pub fn add_task(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Remove the task at `index` and return it
    pub fn remove_task_at(&mut self, index: usize) -> Result<String, TaskListError> {
        if index >= self.items.len() {
            return Err(TaskListError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn tasks(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
