pub mod enums;
pub mod task_list;
pub mod views;

pub use enums::{TimerState, UiMode};
pub use task_list::TaskList;
pub use views::{format_clock, format_time, projected_finish};
