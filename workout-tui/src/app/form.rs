use workout_core::{NewWorkoutEntry, WorkoutType};

use super::state::{FormField, TextInput};

/// The "add workout" form. All three fields are required.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub user_name: TextInput,
    pub workout_type: Option<WorkoutType>,
    pub minutes: TextInput,
    pub focused_field: FormField,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            user_name: TextInput::new(),
            workout_type: None,
            minutes: TextInput::new(),
            focused_field: FormField::UserName,
        }
    }
}

impl EntryForm {
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::UserName => Some(&mut self.user_name),
            FormField::Minutes => Some(&mut self.minutes),
            FormField::WorkoutType => None,
        }
    }

    /// Type a character into the focused text field. The minutes field only
    /// takes characters that can appear in a number.
    pub fn input_char(&mut self, c: char) {
        let numeric_only = self.focused_field == FormField::Minutes;
        if numeric_only && !(c.is_ascii_digit() || c == '.' || c == '-') {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    /// Step through the workout types; `None` is the "Select Workout" slot.
    pub fn cycle_workout_type(&mut self, forward: bool) {
        self.workout_type = cycle_option(&WorkoutType::all(), self.workout_type, forward);
    }

    pub fn parsed_minutes(&self) -> Option<f64> {
        self.minutes
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|m| m.is_finite())
    }

    /// What is still missing, or `None` when the form can be submitted.
    pub fn validation_hint(&self) -> Option<&'static str> {
        if self.user_name.value.trim().is_empty() {
            Some("User Name is required")
        } else if self.workout_type.is_none() {
            Some("Workout Type is required")
        } else if self.parsed_minutes().is_none() {
            Some("Workout Minutes must be a number")
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation_hint().is_none()
    }

    pub fn to_new_entry(&self) -> Option<NewWorkoutEntry> {
        let workout_type = self.workout_type?;
        let minutes = self.parsed_minutes()?;
        if self.user_name.value.trim().is_empty() {
            return None;
        }
        Some(NewWorkoutEntry::new(
            self.user_name.value.clone(),
            workout_type.to_string(),
            minutes,
        ))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Move one step through `options` with a leading `None` slot, wrapping at both ends.
pub fn cycle_option<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let position = current.and_then(|c| options.iter().position(|o| *o == c));
    match (position, forward) {
        (None, true) => options.first().copied(),
        (None, false) => options.last().copied(),
        (Some(i), true) => options.get(i + 1).copied(),
        (Some(0), false) => None,
        (Some(i), false) => options.get(i - 1).copied(),
    }
}
