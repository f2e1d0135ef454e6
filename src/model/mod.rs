//! Domain types shared by the store and the UI.

pub mod draft;
pub mod task;

pub use draft::{FormErrors, FormField, TaskDraft};
pub use task::{NewTask, ParsePriorityError, Priority, PriorityFilter, Task, TaskId};
