use crate::config::Config;
use crate::logger::Logger;
use crate::model::{PriorityFilter, Task};
use crate::store::TaskStore;
use crate::ui::components::{
    DialogComponent, StatusBar, TaskFilterComponent, TaskFormComponent, TaskListComponent, TaskStatsComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    scheduler::CommitScheduler,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: TaskStore,
    pub filter: PriorityFilter,
    pub focus: Focus,
}

impl AppState {
    /// Tasks passing the active filter, cloned for the list component
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.store.list(self.filter).cloned().collect()
    }
}

pub struct AppComponent {
    // Component composition
    form: TaskFormComponent,
    filter: TaskFilterComponent,
    task_list: TaskListComponent,
    stats: TaskStatsComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    scheduler: CommitScheduler,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Settings
    commit_delay: Duration,
    form_width: u16,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let (scheduler, background_action_rx) = CommitScheduler::new();

        let mut task_list = TaskListComponent::new();
        task_list.show_descriptions = config.display.show_descriptions;

        let state = AppState {
            filter: config.display.initial_filter(),
            ..Default::default()
        };

        let mut app = Self {
            form: TaskFormComponent::new(),
            filter: TaskFilterComponent::new(),
            task_list,
            stats: TaskStatsComponent::new(),
            dialog: DialogComponent::new(),
            state,
            scheduler,
            background_action_rx,
            logger,
            commit_delay: config.form.commit_delay(),
            form_width: config.ui.form_width,
            should_quit: false,
        };
        app.set_focus(Focus::Form);
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.state.store
    }

    pub fn form(&self) -> &TaskFormComponent {
        &self.form
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn stats(&self) -> &TaskStatsComponent {
        &self.stats
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Number of submitted tasks still waiting for their commit delay
    pub fn pending_commits(&self) -> usize {
        self.scheduler.pending_count()
    }

    fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
        match focus {
            Focus::Form => {
                self.form.on_focus();
                self.task_list.on_blur();
            }
            Focus::List => {
                self.form.on_blur();
                self.task_list.on_focus();
            }
        }
    }

    /// Push current store and filter data down to every component
    fn sync_component_data(&mut self) {
        self.form.set_pending_commits(self.scheduler.pending_count());
        self.filter.update_data(self.state.filter);
        self.task_list
            .update_data(self.state.visible_tasks(), self.state.store.len(), self.state.filter);
        self.stats.update_data(self.state.store.stats());
        self.dialog.update_logs(self.logger.get_logs());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.state.focus {
            Focus::Form => self.form.handle_key_events(key),
            Focus::List => {
                let filter_action = self.filter.handle_key_events(key);
                if !matches!(filter_action, Action::None) {
                    return filter_action;
                }

                let task_list_action = self.task_list.handle_key_events(key);
                if !matches!(task_list_action, Action::None) {
                    return task_list_action;
                }

                self.handle_global_key(key)
            }
        }
    }

    /// Handle app-level actions
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                let cancelled = self.scheduler.cancel_all();
                if cancelled > 0 {
                    self.logger
                        .log(format!("App: Dropped {} pending task(s) on quit", cancelled));
                }
                self.should_quit = true;
                Action::Quit
            }
            Action::FocusForm => {
                self.set_focus(Focus::Form);
                Action::None
            }
            Action::FocusList => {
                self.set_focus(Focus::List);
                Action::None
            }
            Action::ToggleTask(id) => {
                match self.state.store.toggle(id) {
                    Ok(completed) => self.logger.log(format!(
                        "Task {}: marked {}",
                        id,
                        if completed { "completed" } else { "to do" }
                    )),
                    Err(e) => self.show_error(e.to_string()),
                }
                Action::None
            }
            Action::RemoveTask(id) => {
                match self.state.store.remove(id) {
                    Ok(task) => self.logger.log(format!("Task {}: removed '{}'", id, task.title)),
                    Err(e) => self.show_error(e.to_string()),
                }
                Action::None
            }
            Action::SubmitTask(task) => {
                let title = task.title.clone();
                let job_id = self.scheduler.schedule_commit(task, self.commit_delay);
                self.logger.log(format!(
                    "Form: '{}' scheduled as job {} (lands in {} ms)",
                    title,
                    job_id,
                    self.commit_delay.as_millis()
                ));
                Action::None
            }
            Action::CommitTask { job_id, task } => {
                if self.scheduler.finish(job_id) {
                    let task = self.state.store.add(task);
                    self.logger
                        .log(format!("Task {}: added '{}' ({})", task.id, task.title, task.priority));
                    self.form.reset_after_commit();
                } else {
                    self.logger
                        .log(format!("Job {}: commit arrived after cancel, discarded", job_id));
                }
                Action::None
            }
            Action::CancelPendingCommits => {
                let cancelled = self.scheduler.cancel_all();
                self.logger.log(format!("Form: cancelled {} pending task(s)", cancelled));
                Action::None
            }
            Action::SetFilter(filter) => {
                self.state.filter = filter;
                self.logger.log(format!(
                    "Filter: {}",
                    filter.priority().map_or("none".to_string(), |p| p.to_string())
                ));
                Action::None
            }
            _ => action,
        }
    }

    fn show_error(&mut self, message: String) {
        log::warn!("{}", message);
        self.logger.log(format!("Error: {}", message));
        self.dialog.update(Action::ShowDialog(DialogType::Error(message)));
    }

    /// Drain commits delivered by the scheduler since the last call
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Drain and apply background actions; returns how many were applied
    pub fn apply_background_actions(&mut self) -> usize {
        let actions = self.process_background_actions();
        let count = actions.len();
        for action in actions {
            let action = self.update(action);
            self.handle_app_action(action);
        }
        if count > 0 {
            self.sync_component_data();
        }
        count
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.update(action);

        // Handle app-level actions
        self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_areas(rect, self.form_width);

        self.form.render(f, areas.form);
        self.stats.render(f, areas.stats);
        self.filter.render(f, areas.filter);
        self.task_list.render(f, areas.tasks);
        StatusBar::render(f, areas.status, self.state.focus, self.scheduler.pending_count());

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
