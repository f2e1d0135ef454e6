//! Constants used throughout the application
//!
//! This module centralizes UI text, validation messages and default values
//! to keep wording consistent between components and tests.

// Validation Error Messages
pub const ERROR_TITLE_REQUIRED: &str = "Title for task is required";
pub const ERROR_DESCRIPTION_REQUIRED: &str = "Description for task is required";
pub const ERROR_PRIORITY_REQUIRED: &str = "Task must have a priority";

// Panel Titles
pub const TITLE_FORM: &str = "Add New Task";
pub const TITLE_TASKS: &str = "Tasks";
pub const TITLE_FILTER: &str = "Filter by Priority";
pub const TITLE_STATS: &str = "Task Statistics";

// UI Messages
pub const EMPTY_TASKS_MESSAGE: &str = "There are no tasks";
pub const PENDING_COMMIT_MESSAGE: &str = "Adding task...";
pub const FILTER_ALL_LABEL: &str = "All";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = " Logs - Esc to close ";
pub const DIALOG_TITLE_HELP: &str = " Help - Esc to close ";
pub const DIALOG_TITLE_ERROR: &str = " Error ";

// Defaults
/// Delay between a valid submit and the task landing in the store
pub const DEFAULT_COMMIT_DELAY_MS: u64 = 1500;
/// Upper bound accepted for the commit delay
pub const MAX_COMMIT_DELAY_MS: u64 = 60_000;
/// Default event loop tick in milliseconds
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1000;

// UI Layout Constants
/// Minimum form pane width in columns
pub const FORM_MIN_WIDTH: u16 = 20;
/// Maximum form pane width in columns
pub const FORM_MAX_WIDTH: u16 = 80;
/// Default form pane width in columns
pub const FORM_DEFAULT_WIDTH: u16 = 45;
/// Height of the statistics panel including borders
pub const STATS_PANEL_HEIGHT: u16 = 5;
/// Height of the filter selector including borders
pub const FILTER_PANEL_HEIGHT: u16 = 3;
