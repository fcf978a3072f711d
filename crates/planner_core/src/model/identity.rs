//! Identity record model.
//!
//! # Responsibility
//! - Hold everything one identity owns: credential, events, tasks, settings.
//! - Provide the in-memory sequence operations repositories build on.
//!
//! # Invariants
//! - Event ids are unique within `events`; task ids are unique within `tasks`.
//! - Sequences keep storage order; nothing here sorts them.
//! - The identity name is the store key and is not part of the record.

use super::event::{Event, EventId};
use super::task::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Display theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Per-identity preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

/// Durable data owned by one registered identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Opaque value produced by the active credential policy.
    pub credential: String,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub settings: Settings,
}

impl IdentityRecord {
    /// Creates an empty record for a newly registered identity.
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            events: Vec::new(),
            tasks: Vec::new(),
            settings: Settings::default(),
        }
    }

    pub fn has_event(&self, id: EventId) -> bool {
        self.events.iter().any(|event| event.id == id)
    }

    pub fn has_task(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Events on `date`, in storage order.
    pub fn events_on(&self, date: chrono::NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |event| event.date == date)
    }

    /// Removes the event with `id` (if any), then appends `event`.
    ///
    /// An edited event therefore always ends up last in the sequence.
    pub(crate) fn replace_then_append_event(&mut self, event: Event) {
        self.events.retain(|existing| existing.id != event.id);
        self.events.push(event);
    }

    /// Removes the event with `id`. Returns whether anything was removed.
    pub(crate) fn remove_event(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        self.events.len() != before
    }

    /// Removes the task with `id`. Returns whether anything was removed.
    pub(crate) fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Sets `done` on the task with `id` in place.
    ///
    /// Returns whether the stored value changed.
    pub(crate) fn set_task_done(&mut self, id: TaskId, done: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) if task.done != done => {
                task.done = done;
                true
            }
            _ => false,
        }
    }
}
