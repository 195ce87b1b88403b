use super::utils::{key_hints, render_controls};
use super::*;
use crate::app::{FormField, TextInput};

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Text with a block cursor when focused.
fn input_spans(input: &TextInput, focused: bool) -> Vec<Span<'_>> {
    if !focused {
        return vec![Span::styled(input.value.as_str(), Style::default().fg(Color::White))];
    }
    let (before, after) = input.split_at_cursor();
    vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Yellow)),
        Span::styled(after, Style::default().fg(Color::White)),
    ]
}

pub fn render_form_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let form = &app.form;
    let focused = form.focused_field;

    let workout_type = match form.workout_type {
        Some(t) => Span::styled(
            format!("◀ {t} ▶"),
            Style::default().fg(Color::Cyan),
        ),
        None => Span::styled("◀ Select Workout ▶", Style::default().fg(Color::DarkGray)),
    };

    let mut name_line = vec![Span::styled(
        "User Name*        ",
        label_style(focused == FormField::UserName),
    )];
    name_line.extend(input_spans(&form.user_name, focused == FormField::UserName));

    let mut minutes_line = vec![Span::styled(
        "Workout Minutes*  ",
        label_style(focused == FormField::Minutes),
    )];
    minutes_line.extend(input_spans(&form.minutes, focused == FormField::Minutes));

    let submit = match form.validation_hint() {
        None => Line::from(Span::styled(
            "[ Add Workout ]  press Enter",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Some(hint) => Line::from(vec![
            Span::styled("[ Add Workout ]  ", Style::default().fg(Color::DarkGray)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]),
    };

    let lines = vec![
        Line::from(""),
        Line::from(name_line),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Workout Type*     ",
                label_style(focused == FormField::WorkoutType),
            ),
            workout_type,
        ]),
        Line::from(""),
        Line::from(minutes_line),
        Line::from(""),
        Line::from(""),
        submit,
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(" Add Workout ", Style::default().fg(Color::White)))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, chunks[0]);

    render_controls(
        frame,
        chunks[1],
        key_hints(&[
            ("Tab/↑↓", "Field"),
            ("←/→", "Workout type"),
            ("Enter", "Add"),
            ("Ctrl+X", "Clear field"),
            ("Esc", "Entries"),
        ]),
    );
}
