use tracing::info;
use workout_core::{
    chart_series, unique_users, ChartSeries, EntryId, EntryStore, ListView, NewWorkoutEntry,
    PageView, Storage, StoreError, WorkoutType, PAGE_LENGTHS,
};

mod form;
mod state;
pub use form::{cycle_option, EntryForm};
pub use state::{DeleteContext, FormField, TextInput, View};

pub type AppStore = EntryStore<Box<dyn Storage>>;

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub current_view: View,

    pub store: AppStore,

    // Add-workout form
    pub form: EntryForm,

    // List view: criteria and page live in `list_view`, the rest is UI state
    pub list_view: ListView,
    pub search_input: TextInput,
    pub search_focused: bool,
    pub type_filter: Option<WorkoutType>,
    pub focused_row: Option<usize>, // Index into the rows of the current page

    // Users view
    pub focused_user_index: usize,
    pub selected_user: Option<String>,

    pub delete_context: Option<DeleteContext>,
}

impl App {
    pub fn new(store: AppStore, page_length: usize) -> Self {
        Self {
            running: true,
            status_message: None,
            current_view: View::List,
            store,
            form: EntryForm::default(),
            list_view: ListView::new(page_length),
            search_input: TextInput::new(),
            search_focused: false,
            type_filter: None,
            focused_row: None,
            focused_user_index: 0,
            selected_user: None,
            delete_context: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
    }

    /// The visible page, recomputed from the whole store.
    pub fn page_view(&self) -> PageView<'_> {
        self.list_view.render(self.store.entries())
    }

    pub fn users(&self) -> Vec<String> {
        unique_users(self.store.entries())
    }

    /// Chart data for the selected user, rebuilt on every call.
    pub fn chart(&self) -> Option<ChartSeries> {
        self.selected_user
            .as_deref()
            .map(|user| chart_series(self.store.entries(), user))
    }

    // --- Form ---

    /// Add the entry, select its user and reset the form.
    pub fn add_entry(&mut self, entry: NewWorkoutEntry) -> Result<EntryId, StoreError> {
        let user = entry.user_name.clone();
        let id = self.store.add(entry)?;
        info!(%id, %user, "workout added");
        self.list_view.reset_page();
        self.focused_row = None;
        self.select_user(user);
        self.form.reset();
        Ok(id)
    }

    // --- List filters and paging ---

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.apply_search();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.apply_search();
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.apply_search();
    }

    fn apply_search(&mut self) {
        self.list_view.set_search(self.search_input.value.clone());
        self.focused_row = None;
    }

    pub fn cycle_type_filter(&mut self, forward: bool) {
        self.type_filter = cycle_option(&WorkoutType::all(), self.type_filter, forward);
        self.list_view
            .set_type_filter(self.type_filter.map(|t| t.to_string()));
        self.focused_row = None;
    }

    pub fn cycle_page_length(&mut self) {
        let current = self.list_view.page_length();
        let next = PAGE_LENGTHS
            .iter()
            .position(|&len| len == current)
            .map(|i| PAGE_LENGTHS[(i + 1) % PAGE_LENGTHS.len()])
            .unwrap_or(PAGE_LENGTHS[0]);
        self.list_view.set_page_length(next);
        self.focused_row = None;
    }

    /// Go to the next page if the current one is not the last.
    pub fn next_page(&mut self) -> bool {
        if !self.page_view().can_go_next {
            return false;
        }
        self.list_view.change_page(1);
        self.focused_row = None;
        true
    }

    /// Go to the previous page if the current one is not the first.
    pub fn previous_page(&mut self) -> bool {
        if !self.page_view().can_go_previous {
            return false;
        }
        self.list_view.change_page(-1);
        self.focused_row = None;
        true
    }

    pub fn focus_next_row(&mut self) {
        let rows = self.page_view().rows.len();
        if rows == 0 {
            self.focused_row = None;
            return;
        }
        self.focused_row = Some(match self.focused_row {
            None => 0,
            Some(i) => (i + 1).min(rows - 1),
        });
    }

    pub fn focus_previous_row(&mut self) {
        self.focused_row = match self.focused_row {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn focused_entry_user(&self) -> Option<String> {
        let index = self.focused_row?;
        self.page_view()
            .rows
            .get(index)
            .map(|row| row.entry.user_name.clone())
    }

    // --- Users ---

    pub fn select_user(&mut self, user: impl Into<String>) {
        let user = user.into();
        if let Some(index) = self.users().iter().position(|u| *u == user) {
            self.focused_user_index = index;
        }
        self.selected_user = Some(user);
    }

    pub fn focus_next_user(&mut self) {
        let count = self.users().len();
        if count > 0 && self.focused_user_index + 1 < count {
            self.focused_user_index += 1;
        }
    }

    pub fn focus_previous_user(&mut self) {
        self.focused_user_index = self.focused_user_index.saturating_sub(1);
    }

    /// Keep the focused user inside the list after a user loses their last entry.
    fn clamp_user_focus(&mut self) {
        let count = self.users().len();
        self.focused_user_index = self.focused_user_index.min(count.saturating_sub(1));
    }

    pub fn select_focused_user(&mut self) {
        if let Some(user) = self.users().get(self.focused_user_index).cloned() {
            self.select_user(user);
        }
    }

    // --- Delete ---

    /// Ask for confirmation before deleting the focused row.
    pub fn begin_delete_focused(&mut self) {
        let Some(index) = self.focused_row else {
            self.set_status("Select an entry to delete first");
            return;
        };
        let context = self.page_view().rows.get(index).and_then(|row| {
            row.entry.id.clone().map(|entry_id| DeleteContext {
                entry_id,
                label: format!("{} - {}", row.entry.user_name, row.entry.workout_type),
            })
        });
        match context {
            Some(context) => {
                self.delete_context = Some(context);
                self.navigate_to(View::ConfirmDelete);
            }
            // Stored entries are never rewritten with generated ids, so id-less
            // rows from older data stay as they were.
            None => self.set_status("This entry has no id and cannot be deleted"),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
        self.navigate_to(View::List);
    }

    pub fn confirm_delete(&mut self) -> Result<bool, StoreError> {
        let Some(context) = self.delete_context.take() else {
            return Ok(false);
        };
        self.navigate_to(View::List);
        let removed = self.store.delete(&context.entry_id)?;
        self.list_view.reset_page();
        self.focused_row = None;
        self.clamp_user_focus();
        if removed {
            info!(id = %context.entry_id, "workout deleted");
            self.set_status(format!("Deleted {}", context.label));
        }
        Ok(removed)
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    let storage: Box<dyn Storage> = Box::new(workout_core::MemoryStorage::new());
    App::new(
        EntryStore::load(storage).expect("seeding memory storage"),
        workout_core::DEFAULT_PAGE_LENGTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page_of_seed_data() {
        let app = test_app();
        let page = app.page_view();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 5);
    }

    #[test]
    fn paging_stops_at_boundaries() {
        let mut app = test_app();
        assert!(!app.previous_page());
        assert!(app.next_page());
        assert!(!app.next_page());
        assert_eq!(app.list_view.page(), 2);
        assert!(app.previous_page());
        assert_eq!(app.list_view.page(), 1);
    }

    #[test]
    fn typing_a_search_returns_to_first_page() {
        let mut app = test_app();
        app.next_page();
        app.search_input_char('t');
        assert_eq!(app.list_view.page(), 1);
        assert_eq!(app.list_view.criteria().search, "t");
    }

    #[test]
    fn type_filter_cycles_through_all_types() {
        let mut app = test_app();
        app.cycle_type_filter(true);
        assert_eq!(app.list_view.criteria().workout_type.as_deref(), Some("Running"));
        assert_eq!(app.page_view().filtered_count, 2);
        app.cycle_type_filter(false);
        assert_eq!(app.list_view.criteria().workout_type, None);
    }

    #[test]
    fn page_length_cycles_through_offered_sizes() {
        let mut app = test_app();
        app.next_page();
        app.cycle_page_length();
        assert_eq!(app.list_view.page_length(), 10);
        assert_eq!(app.list_view.page(), 1);
        app.cycle_page_length();
        app.cycle_page_length();
        assert_eq!(app.list_view.page_length(), 5);
    }

    #[test]
    fn adding_selects_the_user_and_resets_form() {
        let mut app = test_app();
        app.next_page();
        app.form.user_name = TextInput::with_value("Asha");

        app.add_entry(NewWorkoutEntry::new("Asha", "Dance", 30.0))
            .unwrap();

        assert_eq!(app.store.len(), 7);
        assert_eq!(app.list_view.page(), 1);
        assert_eq!(app.selected_user.as_deref(), Some("Asha"));
        assert_eq!(app.focused_user_index, 3);
        assert_eq!(app.form, EntryForm::default());
        let chart = app.chart().unwrap();
        assert_eq!(chart.labels, vec!["Dance"]);
    }

    #[test]
    fn row_focus_stays_within_page() {
        let mut app = test_app();
        for _ in 0..10 {
            app.focus_next_row();
        }
        assert_eq!(app.focused_row, Some(4));
        assert_eq!(app.focused_entry_user().as_deref(), Some("Tarun meena"));
        app.focused_row = Some(0);
        app.focus_previous_row();
        assert_eq!(app.focused_row, None);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = test_app();
        app.focus_next_row();
        app.begin_delete_focused();
        assert_eq!(app.current_view, View::ConfirmDelete);
        assert_eq!(
            app.delete_context.as_ref().map(|c| c.label.as_str()),
            Some("Bhola das - Running")
        );

        assert!(app.confirm_delete().unwrap());
        assert_eq!(app.store.len(), 5);
        assert_eq!(app.current_view, View::List);
        assert_eq!(app.status_message.as_deref(), Some("Deleted Bhola das - Running"));
    }

    #[test]
    fn entries_without_id_are_not_offered_for_delete() {
        let blob = r#"[{"userName":"Old","workoutType":"Yoga","workoutMinutes":15}]"#;
        let storage: Box<dyn Storage> =
            Box::new(workout_core::MemoryStorage::new().with_value(workout_core::STORAGE_KEY, blob));
        let mut app = App::new(EntryStore::load(storage).unwrap(), 5);

        app.focus_next_row();
        app.begin_delete_focused();

        assert_eq!(app.current_view, View::List);
        assert!(app.delete_context.is_none());
        assert_eq!(
            app.status_message.as_deref(),
            Some("This entry has no id and cannot be deleted")
        );
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn cancel_delete_keeps_entry() {
        let mut app = test_app();
        app.focus_next_row();
        app.begin_delete_focused();
        app.cancel_delete();
        assert_eq!(app.store.len(), 6);
        assert!(app.delete_context.is_none());
    }

    #[test]
    fn deleting_last_user_entries_keeps_user_focus_in_range() {
        let mut app = test_app();
        app.select_user("Tarun meena");
        assert_eq!(app.focused_user_index, 2);

        let ids: Vec<EntryId> = app
            .store
            .entries()
            .iter()
            .filter(|e| e.user_name == "Tarun meena")
            .filter_map(|e| e.id.clone())
            .collect();
        for entry_id in ids {
            app.delete_context = Some(DeleteContext {
                entry_id,
                label: "Tarun meena".to_string(),
            });
            assert!(app.confirm_delete().unwrap());
        }

        assert_eq!(app.users().len(), 2);
        assert_eq!(app.focused_user_index, 1);
        app.select_focused_user();
        assert_eq!(app.selected_user.as_deref(), Some("Saurabh kumar"));
    }

    #[test]
    fn user_focus_and_selection() {
        let mut app = test_app();
        app.focus_next_user();
        app.focus_next_user();
        app.focus_next_user();
        assert_eq!(app.focused_user_index, 2);
        app.select_focused_user();
        assert_eq!(app.selected_user.as_deref(), Some("Tarun meena"));
        let chart = app.chart().unwrap();
        assert_eq!(chart.labels, vec!["Yoga", "Cycling"]);
        assert_eq!(chart.values, vec![50.0, 40.0]);
    }
}
