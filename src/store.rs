//! In-memory task store.
//!
//! The store owns the task collection together with the id counter, so ids
//! can only be handed out here. Tasks keep insertion order.

use crate::model::{NewTask, PriorityFilter, Task, TaskId};

/// Errors returned by store operations that target a task id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),
}

/// Counts derived from the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task under the next id and advance the counter.
    pub fn add(&mut self, new_task: NewTask) -> &Task {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::from_new(id, new_task));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Remove exactly the task with `id`.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self.position(id)?;
        Ok(self.tasks.remove(index))
    }

    /// Flip the completion flag of the task with `id`, returning the new value.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Tasks visible under `filter`, in insertion order.
    pub fn list(&self, filter: PriorityFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| filter.matches(task.priority))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next committed task will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    fn position(&self, id: TaskId) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }
}
