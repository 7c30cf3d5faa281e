use super::TodoId;
use chrono::{DateTime, SubsecRound, Utc};

/// A todo item as it lives in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Replacement values for the mutable fields of a [`Todo`].
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

fn apply_if_changed<T: PartialEq + Clone>(field: &mut T, new: &T) -> bool {
    if *field != *new {
        *field = new.clone();
        true
    } else {
        false
    }
}

impl Todo {
    /// Creation time is kept with microsecond precision, the resolution the
    /// store persists.
    pub(crate) fn new(id: TodoId, title: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.to_owned(),
            completed: false,
            created_at: created_at.trunc_subsecs(6),
        }
    }

    /// Applies the patch and reports whether any field changed.
    pub(crate) fn apply(&mut self, update: &UpdateTodo) -> bool {
        let title_changed = apply_if_changed(&mut self.title, &update.title);
        let completed_changed = apply_if_changed(&mut self.completed, &update.completed);
        title_changed || completed_changed
    }
}

impl From<&crate::handlers::UpdateTodo> for UpdateTodo {
    fn from(value: &crate::handlers::UpdateTodo) -> Self {
        Self {
            title: value.title.clone(),
            completed: value.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_id_and_creation_time() {
        let created_at = Utc::now();
        let mut todo = Todo::new(TodoId::new(), "buy milk", created_at);
        let id = todo.id;

        let changed = todo.apply(&UpdateTodo {
            title: "buy bread".to_string(),
            completed: true,
        });

        assert!(changed);
        assert_eq!(todo.id, id);
        assert_eq!(todo.created_at, created_at.trunc_subsecs(6));
        assert_eq!(todo.title, "buy bread");
        assert!(todo.completed);
    }

    #[test]
    fn apply_same_values_is_not_a_change() {
        let mut todo = Todo::new(TodoId::new(), "buy milk", Utc::now());

        let changed = todo.apply(&UpdateTodo {
            title: "buy milk".to_string(),
            completed: false,
        });

        assert!(!changed);
    }
}
