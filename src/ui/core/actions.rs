use crate::model::{NewTask, PriorityFilter, TaskId};
use crate::ui::core::scheduler::JobId;

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusForm,
    FocusList,
    NextTask,
    PreviousTask,

    // Task operations
    ToggleTask(TaskId),
    RemoveTask(TaskId),
    SubmitTask(NewTask),
    CommitTask { job_id: JobId, task: NewTask },
    CancelPendingCommits,

    // Filter
    SetFilter(PriorityFilter),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Error(String),
    Help,
    Logs,
}
