//! Core UI functionality for the Taskboard application.
//!
//! This module contains the building blocks every pane relies on: the
//! [`Action`] vocabulary components use to talk to the app, the
//! [`Component`] trait, terminal event polling, and the [`CommitScheduler`]
//! that runs delayed task commits in the background.
//!
//! Components never mutate shared state directly. They turn key presses into
//! actions, the app component applies those actions to the store, and fresh
//! data is pushed back down before the next render.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod scheduler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use scheduler::{CommitScheduler, JobId, ScheduledCommit};
