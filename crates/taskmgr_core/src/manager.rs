use crate::error::AppError;
use crate::model::Task;

/// Result of a completion request: the menu layer uses `already_completed`
/// to decide between the confirmation and the idempotent-notice message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub title: String,
    pub already_completed: bool,
}

/// Sole owner of the session's tasks, in insertion order. Duplicate field
/// values are permitted; identity is positional.
#[derive(Debug, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends the task and returns the new total. Never fails.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    pub fn get(&self, index: usize) -> Result<&Task, AppError> {
        self.tasks
            .get(index)
            .ok_or_else(|| self.index_error(index))
    }

    /// Removes and returns the task at `index`. Out-of-range indexes leave
    /// the collection untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Task, AppError> {
        if index >= self.tasks.len() {
            return Err(self.index_error(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Removes the first task equal to `task`, if any. An absent task is a
    /// silent no-op, never an error.
    pub fn remove_first(&mut self, task: &Task) -> Option<Task> {
        let index = self.tasks.iter().position(|candidate| candidate == task)?;
        Some(self.tasks.remove(index))
    }

    /// Replaces the task at `index` in place; the collection never grows
    /// here. Bounds are checked before any mutation.
    pub fn update_at(&mut self, index: usize, replacement: Task) -> Result<(), AppError> {
        if index >= self.tasks.len() {
            return Err(self.index_error(index));
        }
        self.tasks[index] = replacement;
        Ok(())
    }

    pub fn complete_at(&mut self, index: usize) -> Result<CompletionOutcome, AppError> {
        if index >= self.tasks.len() {
            return Err(self.index_error(index));
        }
        let task = &mut self.tasks[index];
        let transitioned = task.mark_completed();
        Ok(CompletionOutcome {
            title: task.title.clone(),
            already_completed: !transitioned,
        })
    }

    /// Lazy, restartable listing: each entry is the task's rendering prefixed
    /// with its 1-based position.
    pub fn entries(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(position, task)| format!("{}) {}", position + 1, task))
    }

    fn index_error(&self, index: usize) -> AppError {
        AppError::invalid_index(format!(
            "index {} is out of range for {} task(s)",
            index,
            self.tasks.len()
        ))
    }
}
