use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel stored when the user provides no description.
pub const NO_DESCRIPTION: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_priority(format!(
                "unknown priority '{other}', expected LOW, MEDIUM or HIGH"
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    /// MM/DD/YYYY hint only; stored opaque, never parsed as a calendar date.
    pub due_date: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            priority,
            completed: false,
        }
    }

    /// Marks the task complete. Returns whether the flag transitioned; a task
    /// that is already complete stays complete and the caller reports the
    /// notice. There is no transition back to pending.
    pub fn mark_completed(&mut self) -> bool {
        if self.completed {
            false
        } else {
            self.completed = true;
            true
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task Title: {}\nDescription: {}\nDue Date: {}\nPriority: {}\nCompleted: {}",
            self.title,
            self.description,
            self.due_date,
            self.priority,
            if self.completed { "Yes" } else { "No" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{NO_DESCRIPTION, Priority, Task};

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
    }

    #[test]
    fn priority_rejects_unknown_token() {
        let err = "URGENT".parse::<Priority>().unwrap_err();
        assert_eq!(err.code(), "invalid_priority");
        assert!(err.message().contains("urgent"));
    }

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new("Make bed", "Make your bed", "10/10/3000", Priority::High);
        assert!(!task.completed);
    }

    #[test]
    fn mark_completed_transitions_once() {
        let mut task = Task::new("demo", NO_DESCRIPTION, "01/01/2030", Priority::Low);
        assert!(task.mark_completed());
        assert!(task.completed);
        assert!(!task.mark_completed());
        assert!(task.completed);
    }

    #[test]
    fn display_renders_all_fields() {
        let task = Task::new("Make bed", "Make your bed", "10/10/3000", Priority::High);
        let rendered = task.to_string();
        assert!(rendered.contains("Task Title: Make bed"));
        assert!(rendered.contains("Description: Make your bed"));
        assert!(rendered.contains("Due Date: 10/10/3000"));
        assert!(rendered.contains("Priority: HIGH"));
        assert!(rendered.contains("Completed: No"));
    }

    #[test]
    fn display_shows_yes_once_completed() {
        let mut task = Task::new("demo", NO_DESCRIPTION, "01/01/2030", Priority::Medium);
        task.mark_completed();
        assert!(task.to_string().contains("Completed: Yes"));
    }
}
