use std::io::Write;
use workout_core::{ListView, WorkoutEntry};

use crate::ui::utils::format_minutes;

/// The list view for `--page`, counted from 1.
pub fn list_view(
    search: String,
    workout_type: Option<String>,
    page: i64,
    page_length: usize,
) -> ListView {
    let mut view = ListView::new(page_length);
    view.set_search(search);
    view.set_type_filter(workout_type);
    view.change_page(page.saturating_sub(1));
    view
}

/// Print one page of the list view as a plain-text table.
pub fn write_page(out: &mut impl Write, entries: &[WorkoutEntry], view: &ListView) -> std::io::Result<()> {
    let page = view.render(entries);

    writeln!(
        out,
        "{:<24} {:<16} {:>18} {:>22}",
        "Name", "Workouts", "Number of Workouts", "Total Workout Minutes"
    )?;
    for row in &page.rows {
        writeln!(
            out,
            "{:<24} {:<16} {:>18} {:>22}",
            row.entry.user_name,
            row.entry.workout_type,
            row.aggregate.count_of_workouts,
            format_minutes(row.aggregate.total_minutes)
        )?;
    }
    writeln!(
        out,
        "Page {} of {} ({} matching, {} per page)",
        page.page,
        page.total_pages,
        page.filtered_count,
        view.page_length()
    )?;
    Ok(())
}
