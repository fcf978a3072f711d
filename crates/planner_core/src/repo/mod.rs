//! Repositories over the signed-in identity's record.
//!
//! # Responsibility
//! - Implement event/task CRUD on top of an `IdentityStore`.
//! - Resolve the target record from the injected `Session`.
//!
//! # Invariants
//! - Every mutation is a whole-record read-modify-write.
//! - Rejected input never reaches the store.
//! - No-op mutations (deleting an absent id) do not write.

pub mod event_repo;
pub mod task_repo;

use crate::error::{AuthError, PlannerResult};
use crate::model::identity::IdentityRecord;
use crate::session::Session;
use crate::store::IdentityStore;

/// Loads the record of the identity `session` is signed in as.
pub(crate) fn load_signed_in<'s, S: IdentityStore>(
    store: &S,
    session: &'s Session,
) -> PlannerResult<(&'s str, IdentityRecord)> {
    let name = session.require_identity()?;
    let record = store
        .get(name)?
        .ok_or_else(|| AuthError::MissingIdentity(name.to_string()))?;
    Ok((name, record))
}
