//! Reusable UI components

pub mod badge;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod task_filter_component;
pub mod task_form_component;
pub mod task_list_component;
pub mod task_stats_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use task_filter_component::TaskFilterComponent;
pub use task_form_component::TaskFormComponent;
pub use task_list_component::TaskListComponent;
pub use task_stats_component::TaskStatsComponent;
