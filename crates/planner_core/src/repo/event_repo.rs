//! Event repository.
//!
//! # Responsibility
//! - List, upsert and delete events of the signed-in identity.
//!
//! # Invariants
//! - `upsert` of an existing id removes the old entry and appends the new
//!   one, so edited events move to the end of the sequence.
//! - `upsert` without a live id always assigns a fresh id unique within the
//!   sequence.
//! - `delete` is idempotent.

use super::load_signed_in;
use crate::error::{PlannerError, PlannerResult};
use crate::model::event::{Event, EventDraft, EventId};
use crate::model::identity::IdentityRecord;
use crate::session::Session;
use crate::store::IdentityStore;
use chrono::NaiveDate;
use log::{info, warn};
use uuid::Uuid;

/// Event CRUD for the identity named by a session.
pub struct EventRepository<S: IdentityStore> {
    store: S,
}

impl<S: IdentityStore> EventRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Events dated `date`, in storage order.
    pub fn list(&self, session: &Session, date: NaiveDate) -> PlannerResult<Vec<Event>> {
        let (_, record) = load_signed_in(&self.store, session)?;
        let events = record.events_on(date).cloned().collect();
        Ok(events)
    }

    /// All events ordered by date; same-day events keep storage order.
    ///
    /// Sorting happens on the returned copy only. Stored order is untouched.
    pub fn list_all(&self, session: &Session) -> PlannerResult<Vec<Event>> {
        let (_, record) = load_signed_in(&self.store, session)?;
        let mut events = record.events;
        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    /// First event of `date` in storage order. This is the one a day-cell
    /// click opens for editing.
    pub fn first_on(&self, session: &Session, date: NaiveDate) -> PlannerResult<Option<Event>> {
        let (_, record) = load_signed_in(&self.store, session)?;
        let first = record.events_on(date).next().cloned();
        Ok(first)
    }

    /// Looks up one event by id.
    pub fn get(&self, session: &Session, id: EventId) -> PlannerResult<Option<Event>> {
        let (_, record) = load_signed_in(&self.store, session)?;
        Ok(record.events.into_iter().find(|event| event.id == id))
    }

    /// Inserts a new event or replaces an existing one, returning what was stored.
    ///
    /// # Errors
    /// - `Validation(EmptyTitle)` when the trimmed title is empty.
    /// - `Auth` when the session is signed out or its record is gone.
    /// - `StoreUnavailable` when the write fails.
    pub fn upsert(&self, session: &Session, draft: EventDraft) -> PlannerResult<Event> {
        let (name, mut record) = load_signed_in(&self.store, session)?;

        let (id, mode) = match draft.id {
            Some(id) if record.has_event(id) => (id, "replace"),
            _ => (fresh_event_id(&record), "insert"),
        };
        let event = match draft.into_event(id) {
            Ok(event) => event,
            Err(err) => {
                let err = PlannerError::from(err);
                warn!(
                    "event=event_upsert module=repo status=rejected mode={mode} error_code={} error={err}",
                    err.code()
                );
                return Err(err);
            }
        };

        record.replace_then_append_event(event.clone());
        self.store.set(name, &record)?;

        info!(
            "event=event_upsert module=repo status=ok mode={mode} event_id={} event_count={}",
            event.id,
            record.events.len()
        );
        Ok(event)
    }

    /// Removes the event with `id`; absent ids are ignored.
    pub fn delete(&self, session: &Session, id: EventId) -> PlannerResult<()> {
        let (name, mut record) = load_signed_in(&self.store, session)?;
        if !record.remove_event(id) {
            info!("event=event_delete module=repo status=noop event_id={id}");
            return Ok(());
        }

        self.store.set(name, &record)?;
        info!(
            "event=event_delete module=repo status=ok event_id={id} event_count={}",
            record.events.len()
        );
        Ok(())
    }
}

fn fresh_event_id(record: &IdentityRecord) -> EventId {
    loop {
        let id = Uuid::new_v4();
        if !record.has_event(id) {
            return id;
        }
    }
}
