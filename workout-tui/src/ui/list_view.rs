use super::utils::{format_minutes, key_hints, render_controls};
use super::*;
use ratatui::widgets::{Cell, Row, Table};

pub fn render_list_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search + filters
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Pager
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_filters(frame, app, chunks[0]);

    let page = app.page_view();

    let header = Row::new(vec![
        "Name",
        "Workouts",
        "Number of Workouts",
        "Total Workout Minutes",
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = page
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if app.focused_row == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            Row::new(vec![
                Cell::from(row.entry.user_name.clone()),
                Cell::from(row.entry.workout_type.clone()),
                Cell::from(row.aggregate.count_of_workouts.to_string()),
                Cell::from(format_minutes(row.aggregate.total_minutes)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(
                format!(" Workout Entries ({} shown) ", page.filtered_count),
                Style::default().fg(Color::White),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(table, chunks[1]);

    let enabled = Style::default().fg(Color::Yellow);
    let disabled = Style::default().fg(Color::DarkGray);
    let pager = Line::from(vec![
        Span::styled("<", if page.can_go_previous { enabled } else { disabled }),
        Span::raw(format!("  Page {} of {}  ", page.page, page.total_pages)),
        Span::styled(">", if page.can_go_next { enabled } else { disabled }),
        Span::styled(
            format!("    {} per page", app.list_view.page_length()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(pager).alignment(Alignment::Center), chunks[2]);

    let hints = if app.search_focused {
        key_hints(&[("Type", "Search"), ("Ctrl+X", "Clear"), ("Enter/Esc", "Done")])
    } else {
        key_hints(&[
            ("/", "Search"),
            ("t/T", "Type"),
            ("p", "Per page"),
            ("←/→", "Page"),
            ("↑↓", "Select"),
            ("Enter", "Chart"),
            ("d", "Delete"),
            ("a", "Add"),
            ("u", "Users"),
            ("q", "Quit"),
        ])
    };
    render_controls(frame, chunks[3], hints);
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let search_style = if app.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled("Search by name: ", search_style)];
    if app.search_input.value.is_empty() && !app.search_focused {
        spans.push(Span::styled("(all)", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            app.search_input.value.as_str(),
            Style::default().fg(Color::White),
        ));
    }
    if app.search_focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    let filter_label = app
        .type_filter
        .map(|t| t.to_string())
        .unwrap_or_else(|| "All Workout Types".to_string());
    spans.push(Span::styled("    Type: ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(filter_label, Style::default().fg(Color::Cyan)));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
