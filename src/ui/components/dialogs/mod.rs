//! Dialog building blocks shared by panes and modal dialogs

pub mod common;
pub mod system_dialogs;
