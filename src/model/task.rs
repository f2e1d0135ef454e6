//! Task and priority types.

use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the [`TaskStore`](crate::store::TaskStore) at commit time.
pub type TaskId = u64;

/// Ordinal priority label used for categorization and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Canonical display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority, wrapping from High back to Low.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority, wrapping from Low back to High.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the priority labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority '{0}', expected one of Low, Medium, High")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePriorityError(s.to_string()))
    }
}

/// Priority filter applied to the task list.
///
/// `All` corresponds to the empty selector value and shows every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Exact equality match on priority; `All` matches everything.
    #[must_use]
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => wanted == priority,
        }
    }

    /// Selector order: All, Low, Medium, High, then back to All.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PriorityFilter::All => PriorityFilter::Only(Priority::Low),
            PriorityFilter::Only(Priority::Low) => PriorityFilter::Only(Priority::Medium),
            PriorityFilter::Only(Priority::Medium) => PriorityFilter::Only(Priority::High),
            PriorityFilter::Only(Priority::High) => PriorityFilter::All,
        }
    }

    /// Selector value, empty when no filter is active.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            PriorityFilter::All => "",
            PriorityFilter::Only(priority) => priority.label(),
        }
    }

    #[must_use]
    pub fn priority(self) -> Option<Priority> {
        match self {
            PriorityFilter::All => None,
            PriorityFilter::Only(priority) => Some(priority),
        }
    }
}

impl From<Option<Priority>> for PriorityFilter {
    fn from(priority: Option<Priority>) -> Self {
        priority.map_or(PriorityFilter::All, PriorityFilter::Only)
    }
}

impl FromStr for PriorityFilter {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Ok(PriorityFilter::All)
        } else {
            s.parse().map(PriorityFilter::Only)
        }
    }
}

/// A validated task waiting to be committed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// A single to-do item held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Task {
    pub(crate) fn from_new(id: TaskId, new_task: NewTask) -> Self {
        Self {
            id,
            title: new_task.title,
            description: new_task.description,
            priority: new_task.priority,
            completed: false,
        }
    }

    /// Label shown in the list for the completion state.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "To Do"
        }
    }
}
