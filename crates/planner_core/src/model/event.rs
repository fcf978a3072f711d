//! Calendar event model.
//!
//! # Invariants
//! - `id` is assigned once and survives edits.
//! - `date` is a naive local calendar date, serialized as `YYYY-MM-DD`.
//! - Blank optional fields are stored as absent.

use super::normalize_optional;
use super::validation::{require_title, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an event within one identity record.
pub type EventId = Uuid;

/// A dated calendar entry owned by one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    /// Free-form time of day, e.g. `09:30`. Not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    /// ISO `YYYY-MM-DD` rendering of the event date.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Caller input for creating or replacing an event.
///
/// `id = None` creates a new event; `id = Some(..)` replaces the event with
/// that id if it still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Option<EventId>,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl EventDraft {
    /// Draft for a brand-new event with only the required fields.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            title: title.into(),
            date,
            time: None,
            category: None,
            description: None,
        }
    }

    /// Draft pre-filled from a stored event, ready for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: Some(event.id),
            title: event.title.clone(),
            date: event.date,
            time: event.time.clone(),
            category: event.category.clone(),
            description: event.description.clone(),
        }
    }

    /// Validates the draft and binds it to `id`.
    pub(crate) fn into_event(self, id: EventId) -> Result<Event, ValidationError> {
        Ok(Event {
            id,
            title: require_title(&self.title)?,
            date: self.date,
            time: normalize_optional(self.time),
            category: normalize_optional(self.category),
            description: normalize_optional(self.description),
        })
    }
}
