use crate::app::AppState;
use crate::domain::{format_clock, format_time, projected_finish};
use crate::timer::TimerSnapshot;
use crate::ui::styles::{border_style, default_style, gauge_style, hint_style, timer_state_style, title_style};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Lines shown above the progress gauge
fn timer_lines(snap: &TimerSnapshot) -> Vec<Line<'static>> {
    let state_style = timer_state_style(snap.state);

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format_time(snap.remaining_seconds), state_style)),
        Line::from(vec![
            Span::styled(snap.state.to_tag(), state_style),
            Span::styled("  ·  Space ", hint_style()),
            Span::styled(snap.state.action_label(), default_style()),
        ]),
    ];

    if snap.is_running() {
        let finish = projected_finish(Local::now(), snap.remaining_seconds);
        lines.push(Line::styled(format!("ends at {}", format_clock(finish)), hint_style()));
    } else {
        lines.push(Line::raw(""));
    }

    lines
}

/// Render the countdown clock with state and session progress
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let snap = app.timer_view;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomodoro ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let paragraph = Paragraph::new(timer_lines(&snap)).alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(snap.progress())
        .label(format!("{:.0}%", snap.progress() * 100.0));
    f.render_widget(gauge, chunks[1]);
}
