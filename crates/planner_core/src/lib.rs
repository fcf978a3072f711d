//! Core state engine for the personal planner.
//! This crate is the single source of truth for business invariants: the
//! per-identity record, event/task repositories and the month grid builder.

pub mod calendar;
pub mod credential;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod store;

pub use calendar::{build_month_grid, days_in_month, Cell, DayCell, YearMonth};
pub use credential::{CredentialPolicy, PlaintextCredentials};
pub use error::{AuthError, PlannerError, PlannerResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{Event, EventDraft, EventId};
pub use model::identity::{IdentityRecord, Settings, Theme};
pub use model::task::{Task, TaskId};
pub use model::validation::ValidationError;
pub use repo::event_repo::EventRepository;
pub use repo::task_repo::TaskRepository;
pub use service::account_service::AccountService;
pub use session::Session;
pub use store::{IdentityStore, SqliteIdentityStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
