/// Runtime state of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Paused,
}

impl TimerState {
    /// Short uppercase label shown next to the clock
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        }
    }

    /// Label of the primary button for this state
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Idle => "Start",
            Self::Running => "Pause",
            Self::Paused => "Resume",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask, // Typing into the new-task line
}
