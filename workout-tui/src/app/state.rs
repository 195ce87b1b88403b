use workout_core::EntryId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Form,
    List,
    Users,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    UserName,
    WorkoutType,
    Minutes,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::UserName => FormField::WorkoutType,
            FormField::WorkoutType => FormField::Minutes,
            FormField::Minutes => FormField::UserName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::UserName => FormField::Minutes,
            FormField::WorkoutType => FormField::UserName,
            FormField::Minutes => FormField::WorkoutType,
        }
    }
}

/// Entry waiting for a yes/no in the delete dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteContext {
    pub entry_id: EntryId,
    pub label: String,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
