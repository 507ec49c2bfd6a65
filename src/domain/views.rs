use chrono::{DateTime, Local};

/// Format a number of seconds as "MM:SS", both fields zero-padded
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Wall-clock time at which a countdown with `remaining_seconds` left will end
pub fn projected_finish(now: DateTime<Local>, remaining_seconds: u32) -> DateTime<Local> {
    now + chrono::Duration::seconds(i64::from(remaining_seconds))
}

/// Format wall-clock time as "HH:MM"
pub fn format_clock(time: DateTime<Local>) -> String {
    time.format("%H:%M").to_string()
}
