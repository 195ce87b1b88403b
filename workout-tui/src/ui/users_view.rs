use super::utils::{format_minutes, key_hints, render_controls};
use super::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, List, ListItem};
use workout_core::ChartSeries;

pub fn render_users_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(body);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(outer[0]);

    render_user_list(frame, app, panels[0]);

    match (&app.selected_user, app.chart()) {
        (Some(user), Some(series)) => render_chart(frame, user, &series, panels[1]),
        _ => {
            let empty = Paragraph::new("Select a user to see their workout progress")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, panels[1]);
        }
    }

    render_controls(
        frame,
        outer[1],
        key_hints(&[
            ("↑↓", "Move"),
            ("Enter", "Show chart"),
            ("a", "Add"),
            ("Esc", "Entries"),
            ("q", "Quit"),
        ]),
    );
}

fn render_user_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .users()
        .into_iter()
        .enumerate()
        .map(|(i, user)| {
            let selected = app.selected_user.as_deref() == Some(user.as_str());
            let marker = if selected { "● " } else { "  " };
            let style = if i == app.focused_user_index {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(format!("{marker}{user}"), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(" Users ", Style::default().fg(Color::White))),
    );
    frame.render_widget(list, area);
}

/// Bars start at zero; negative totals draw as empty bars but keep their label value.
fn bar_height(minutes: f64) -> u64 {
    if minutes > 0.0 {
        minutes.round() as u64
    } else {
        0
    }
}

fn render_chart(frame: &mut Frame, user: &str, series: &ChartSeries, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" {user}'s Workout Progress "),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::new(2, 2, 1, 0));

    if series.is_empty() {
        let empty = Paragraph::new("No workouts recorded")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = series
        .iter()
        .map(|(label, minutes)| {
            Bar::default()
                .value(bar_height(minutes))
                .text_value(format_minutes(minutes))
                .label(Line::from(label.to_string()))
        })
        .collect();

    let inner_width = area.width.saturating_sub(6);
    let count = bars.len() as u16;
    let bar_width = (inner_width / count.max(1)).saturating_sub(2).clamp(3, 14);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    frame.render_widget(chart, area);
}
