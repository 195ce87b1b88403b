use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod delete_dialog;
mod form_view;
mod list_view;
mod users_view;
pub(crate) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Form => form_view::render_form_view(frame, app, body),
        View::List => list_view::render_list_view(frame, app, body),
        View::Users => users_view::render_users_view(frame, app, body),
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app, body),
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            "Health Challenge Tracker",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  ·  {} entries  ·  {} users",
                app.store.len(),
                app.users().len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(status) = &app.status_message {
        spans.push(Span::styled(
            format!("  ·  {status}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
