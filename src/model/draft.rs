//! Form draft and its validation.

use super::task::{NewTask, Priority};
use crate::constants::{ERROR_DESCRIPTION_REQUIRED, ERROR_PRIORITY_REQUIRED, ERROR_TITLE_REQUIRED};
use std::collections::BTreeMap;

/// Input fields of the task form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Priority,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::Priority];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Priority => "Priority",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
        }
    }
}

/// Field-level validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// In-progress task bound to the form inputs.
///
/// `id` is a leftover slot that never feeds the committed task's id. A fresh
/// draft carries a blank slot; [`TaskDraft::cleared`] (the post-commit reset)
/// leaves it out entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskDraft {
    pub fn new() -> Self {
        Self {
            id: Some(String::new()),
            ..Self::cleared()
        }
    }

    /// Blank draft used after a commit lands. Has no id slot.
    pub fn cleared() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            priority: None,
        }
    }

    /// Mutable access to a text field, `None` for the priority selector.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Priority => None,
        }
    }

    /// Check the required fields. Empty result means the draft can be submitted.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, ERROR_TITLE_REQUIRED);
        }
        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, ERROR_DESCRIPTION_REQUIRED);
        }
        if self.priority.is_none() {
            errors.insert(FormField::Priority, ERROR_PRIORITY_REQUIRED);
        }

        errors
    }

    /// Snapshot the draft as a committable task, or return every failing field.
    pub fn to_new_task(&self) -> Result<NewTask, FormErrors> {
        let errors = self.validate();
        match self.priority {
            Some(priority) if errors.is_empty() => Ok(NewTask {
                title: self.title.clone(),
                description: self.description.clone(),
                priority,
            }),
            _ => Err(errors),
        }
    }
}
