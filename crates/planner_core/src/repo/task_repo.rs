//! Task repository.
//!
//! # Invariants
//! - Tasks are listed in insertion order; nothing sorts them.
//! - `set_done` edits in place and never moves a task.
//! - `set_done` and `delete` are idempotent and ignore absent ids.

use super::load_signed_in;
use crate::error::{PlannerError, PlannerResult};
use crate::model::identity::IdentityRecord;
use crate::model::normalize_optional;
use crate::model::task::{Task, TaskId};
use crate::model::validation::require_title;
use crate::session::Session;
use crate::store::IdentityStore;
use chrono::NaiveDate;
use log::{info, warn};
use uuid::Uuid;

/// Task CRUD for the identity named by a session.
pub struct TaskRepository<S: IdentityStore> {
    store: S,
}

impl<S: IdentityStore> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Appends a new open task.
    ///
    /// # Errors
    /// - `Validation(EmptyTitle)` when the trimmed title is empty; the task
    ///   list is left as it was.
    pub fn add(
        &self,
        session: &Session,
        title: &str,
        due: Option<NaiveDate>,
        description: Option<String>,
    ) -> PlannerResult<Task> {
        let title = match require_title(title) {
            Ok(title) => title,
            Err(err) => {
                let err = PlannerError::from(err);
                warn!(
                    "event=task_add module=repo status=rejected error_code={} error={err}",
                    err.code()
                );
                return Err(err);
            }
        };
        let (name, mut record) = load_signed_in(&self.store, session)?;

        let task = Task {
            id: fresh_task_id(&record),
            title,
            due,
            description: normalize_optional(description),
            done: false,
        };
        record.tasks.push(task.clone());
        self.store.set(name, &record)?;

        info!(
            "event=task_add module=repo status=ok task_id={} task_count={}",
            task.id,
            record.tasks.len()
        );
        Ok(task)
    }

    /// Marks the task with `id` as done or not done.
    pub fn set_done(&self, session: &Session, id: TaskId, done: bool) -> PlannerResult<()> {
        let (name, mut record) = load_signed_in(&self.store, session)?;
        if !record.set_task_done(id, done) {
            info!("event=task_set_done module=repo status=noop task_id={id} done={done}");
            return Ok(());
        }

        self.store.set(name, &record)?;
        info!("event=task_set_done module=repo status=ok task_id={id} done={done}");
        Ok(())
    }

    /// Removes the task with `id`; absent ids are ignored.
    pub fn delete(&self, session: &Session, id: TaskId) -> PlannerResult<()> {
        let (name, mut record) = load_signed_in(&self.store, session)?;
        if !record.remove_task(id) {
            info!("event=task_delete module=repo status=noop task_id={id}");
            return Ok(());
        }

        self.store.set(name, &record)?;
        info!(
            "event=task_delete module=repo status=ok task_id={id} task_count={}",
            record.tasks.len()
        );
        Ok(())
    }

    /// All tasks in insertion order.
    pub fn list(&self, session: &Session) -> PlannerResult<Vec<Task>> {
        let (_, record) = load_signed_in(&self.store, session)?;
        Ok(record.tasks)
    }
}

fn fresh_task_id(record: &IdentityRecord) -> TaskId {
    loop {
        let id = Uuid::new_v4();
        if !record.has_task(id) {
            return id;
        }
    }
}
