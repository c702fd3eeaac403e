//! Task Store
//!
//! Holds the ordered task list, the pending input text, and the edit cursor.
//! All mutations go through [`TaskStore::apply`] as discrete [`Action`]s so
//! state transitions stay explicit and testable without a terminal.
//!
//! Every action is a total function over the list: empty input and unknown
//! ids are silently ignored, never errors.

/// A single to-do item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// Stringified insertion counter, unique for the process lifetime
    pub id: String,
    /// The task text as typed
    pub text: String,
    /// Whether the task has been checked off
    pub completed: bool,
}

/// A discrete state transition applied to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Commit the pending input: append a new task, or save the edited one
    Submit,
    /// Remove the task with this id
    Delete(String),
    /// Flip the completed flag of the task with this id
    Toggle(String),
    /// Begin editing the task with this id
    StartEdit(String),
    /// Append a character to the pending input
    InputChar(char),
    /// Remove the last character of the pending input
    InputBackspace,
    /// Abandon the pending input and edit cursor
    CancelEdit,
}

/// The in-memory task list and input state.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    input: String,
    editing: Option<String>,
    /// Insertion counter; never decremented, so ids stay unique after deletes
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The pending input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The id of the task currently being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Whether a submit would save an edit rather than append.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Apply an action. Returns `true` if the task list itself changed
    /// (input-only edits return `false`).
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Submit => self.submit(),
            Action::Delete(id) => self.delete(&id),
            Action::Toggle(id) => self.toggle(&id),
            Action::StartEdit(id) => {
                self.start_edit(&id);
                false
            }
            Action::InputChar(c) => {
                self.input.push(c);
                false
            }
            Action::InputBackspace => {
                self.input.pop();
                false
            }
            Action::CancelEdit => {
                self.editing = None;
                self.input.clear();
                false
            }
        }
    }

    /// Commit the pending input.
    ///
    /// Whitespace-only input is a no-op and leaves the edit cursor alone.
    /// With an edit cursor set, the task's text is replaced in place; its id
    /// and list position do not change.
    fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }

        let changed = match self.editing.take() {
            Some(id) => {
                let found = self.tasks.iter_mut().find(|t| t.id == id);
                if let Some(task) = &found {
                    tracing::debug!(id = %task.id, "task edited");
                }
                match found {
                    Some(task) => {
                        task.text = self.input.clone();
                        true
                    }
                    // Edited task was deleted meanwhile; drop the text
                    None => false,
                }
            }
            None => {
                let id = self.next_id.to_string();
                self.next_id += 1;
                tracing::debug!(id = %id, "task added");
                self.tasks.push(Task {
                    id,
                    text: self.input.clone(),
                    completed: false,
                });
                true
            }
        };

        self.input.clear();
        changed
    }

    fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            tracing::debug!(id = %id, "task deleted");
        }
        removed
    }

    fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::debug!(id = %id, completed = task.completed, "task toggled");
                true
            }
            None => false,
        }
    }

    fn start_edit(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
            self.input = task.text.clone();
            self.editing = Some(task.id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for text in texts {
            for c in text.chars() {
                store.apply(Action::InputChar(c));
            }
            store.apply(Action::Submit);
        }
        store
    }

    fn type_input(store: &mut TaskStore, text: &str) {
        for c in text.chars() {
            store.apply(Action::InputChar(c));
        }
    }

    // ========================================================================
    // Add Tests
    // ========================================================================

    #[test]
    fn test_add_appends_and_clears_input() {
        let mut store = TaskStore::new();
        type_input(&mut store, "water the plants");

        let changed = store.apply(Action::Submit);

        assert!(changed);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "water the plants");
        assert!(!store.tasks()[0].completed);
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_add_empty_input_is_noop() {
        let mut store = TaskStore::new();
        let changed = store.apply(Action::Submit);
        assert!(!changed);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_whitespace_only_is_noop() {
        let mut store = TaskStore::new();
        type_input(&mut store, "   \t ");
        let changed = store.apply(Action::Submit);
        assert!(!changed);
        assert!(store.tasks().is_empty());
        // A no-op submit leaves the input untouched
        assert_eq!(store.input(), "   \t ");
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = store_with(&["a", "b", "c"]);
        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let mut store = store_with(&["a", "b"]);
        store.apply(Action::Delete("0".to_string()));

        type_input(&mut store, "c");
        store.apply(Action::Submit);

        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    // ========================================================================
    // Delete Tests
    // ========================================================================

    #[test]
    fn test_delete_removes_task() {
        let mut store = store_with(&["a", "b", "c"]);
        let changed = store.apply(Action::Delete("1".to_string()));

        assert!(changed);
        assert_eq!(store.tasks().len(), 2);
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        let changed = store.apply(Action::Delete("nope".to_string()));
        assert!(!changed);
        assert_eq!(store.tasks().len(), 1);
    }

    // ========================================================================
    // Toggle Tests
    // ========================================================================

    #[test]
    fn test_toggle_flips_completed() {
        let mut store = store_with(&["a"]);
        let changed = store.apply(Action::Toggle("0".to_string()));
        assert!(changed);
        assert!(store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut store = store_with(&["a"]);
        store.apply(Action::Toggle("0".to_string()));
        store.apply(Action::Toggle("0".to_string()));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        let changed = store.apply(Action::Toggle("99".to_string()));
        assert!(!changed);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_preserves_order() {
        let mut store = store_with(&["a", "b", "c"]);
        store.apply(Action::Toggle("1".to_string()));
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    // ========================================================================
    // Edit Tests
    // ========================================================================

    #[test]
    fn test_start_edit_populates_input() {
        let mut store = store_with(&["call mum"]);
        store.apply(Action::StartEdit("0".to_string()));

        assert!(store.is_editing());
        assert_eq!(store.editing(), Some("0"));
        assert_eq!(store.input(), "call mum");
    }

    #[test]
    fn test_start_edit_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        store.apply(Action::StartEdit("99".to_string()));
        assert!(!store.is_editing());
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_edit_then_submit_replaces_in_place() {
        let mut store = store_with(&["a", "b", "c"]);
        store.apply(Action::StartEdit("1".to_string()));
        store.apply(Action::InputBackspace);
        type_input(&mut store, "B!");

        let changed = store.apply(Action::Submit);

        assert!(changed);
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(store.tasks()[1].id, "1");
        assert_eq!(store.tasks()[1].text, "B!");
        assert!(!store.is_editing());
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_edit_preserves_completed_flag() {
        let mut store = store_with(&["a"]);
        store.apply(Action::Toggle("0".to_string()));
        store.apply(Action::StartEdit("0".to_string()));
        type_input(&mut store, "!");
        store.apply(Action::Submit);

        assert!(store.tasks()[0].completed);
        assert_eq!(store.tasks()[0].text, "a!");
    }

    #[test]
    fn test_edit_of_deleted_task_drops_text() {
        let mut store = store_with(&["a"]);
        store.apply(Action::StartEdit("0".to_string()));
        store.apply(Action::Delete("0".to_string()));

        let changed = store.apply(Action::Submit);

        assert!(!changed);
        assert!(store.tasks().is_empty());
        assert!(!store.is_editing());
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_cancel_edit_clears_cursor_and_input() {
        let mut store = store_with(&["a"]);
        store.apply(Action::StartEdit("0".to_string()));
        store.apply(Action::CancelEdit);

        assert!(!store.is_editing());
        assert_eq!(store.input(), "");
        assert_eq!(store.tasks()[0].text, "a");
    }

    // ========================================================================
    // Input Tests
    // ========================================================================

    #[test]
    fn test_input_char_and_backspace() {
        let mut store = TaskStore::new();
        type_input(&mut store, "abc");
        store.apply(Action::InputBackspace);
        assert_eq!(store.input(), "ab");
    }

    #[test]
    fn test_backspace_on_empty_input_is_noop() {
        let mut store = TaskStore::new();
        let changed = store.apply(Action::InputBackspace);
        assert!(!changed);
        assert_eq!(store.input(), "");
    }
}
