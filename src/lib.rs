//! Taskboard - a single-screen, in-memory task manager for the terminal
//!
//! Tasks are created through a validated form, listed with an optional
//! priority filter, toggled or removed in place, and summarized in a
//! statistics panel. Nothing is persisted: quitting discards every task.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`model`] - Task, priority and form draft types
//! * [`store`] - The in-memory task store and derived statistics
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Task, priority and draft types
pub mod model;

/// In-memory task store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use model::{NewTask, Priority, PriorityFilter, Task, TaskDraft, TaskId};
pub use store::{StoreError, TaskStats, TaskStore};
