//! Account use-case service.
//!
//! # Responsibility
//! - Register identities and drive the sign-in/sign-out state machine.
//! - Restore the last session from the store's durable pointer.
//! - Expose per-identity settings (theme).
//!
//! # Invariants
//! - A failed sign-in leaves both the session and the store pointer unchanged.
//! - Sign-out always succeeds in moving the session to `SignedOut`.
//! - Registration never overwrites an existing identity.

use crate::credential::CredentialPolicy;
use crate::error::{AuthError, PlannerError, PlannerResult};
use crate::model::identity::{IdentityRecord, Theme};
use crate::model::validation::ValidationError;
use crate::repo::load_signed_in;
use crate::session::Session;
use crate::store::IdentityStore;
use log::{info, warn};

/// Account lifecycle over an identity store.
pub struct AccountService<S: IdentityStore, C: CredentialPolicy> {
    store: S,
    credentials: C,
}

impl<S: IdentityStore, C: CredentialPolicy> AccountService<S, C> {
    pub fn new(store: S, credentials: C) -> Self {
        Self { store, credentials }
    }

    /// Registers a new identity with an empty record and the dark theme.
    ///
    /// The name is trimmed; it stays case-sensitive. Registration does not
    /// sign the identity in.
    ///
    /// # Errors
    /// - `Validation` for an empty name or credential.
    /// - `DuplicateIdentity` when the name is taken.
    pub fn register(&self, name: &str, credential: &str) -> PlannerResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyIdentityName.into());
        }
        if credential.is_empty() {
            return Err(ValidationError::EmptyCredential.into());
        }
        if self.store.contains(name)? {
            let err = PlannerError::DuplicateIdentity(name.to_string());
            warn!(
                "event=identity_register module=service status=rejected error_code={}",
                err.code()
            );
            return Err(err);
        }

        let record = IdentityRecord::new(self.credentials.seal(credential));
        self.store.set(name, &record)?;
        info!("event=identity_register module=service status=ok");
        Ok(())
    }

    /// Builds the startup session from the durable pointer.
    ///
    /// A pointer naming a record that no longer exists is cleared and the
    /// session starts signed out.
    pub fn restore_session(&self) -> PlannerResult<Session> {
        let Some(name) = self.store.current_name()? else {
            return Ok(Session::SignedOut);
        };
        if !self.store.contains(&name)? {
            warn!("event=session_restore module=service status=stale_pointer");
            self.store.set_current_name(None)?;
            return Ok(Session::SignedOut);
        }

        info!("event=session_restore module=service status=ok");
        Ok(Session::SignedIn(name))
    }

    /// Moves `session` to `SignedIn(name)` when the credential verifies.
    ///
    /// # Errors
    /// - `Auth(InvalidCredentials)` for unknown names and mismatched
    ///   credentials alike; `session` is not touched.
    pub fn sign_in(&self, session: &mut Session, name: &str, credential: &str) -> PlannerResult<()> {
        let name = name.trim();
        let verified = match self.store.get(name)? {
            Some(record) => self.credentials.verify(&record.credential, credential),
            None => false,
        };
        if !verified {
            let err = PlannerError::from(AuthError::InvalidCredentials);
            warn!(
                "event=sign_in module=service status=rejected error_code={}",
                err.code()
            );
            return Err(err);
        }

        self.store.set_current_name(Some(name))?;
        *session = Session::SignedIn(name.to_string());
        info!("event=sign_in module=service status=ok");
        Ok(())
    }

    /// Moves `session` to `SignedOut` and clears the durable pointer.
    ///
    /// The in-memory session is signed out even when clearing the pointer
    /// fails; the store error is still returned.
    pub fn sign_out(&self, session: &mut Session) -> PlannerResult<()> {
        let was_signed_in = session.is_signed_in();
        *session = Session::SignedOut;
        self.store.set_current_name(None)?;
        info!("event=sign_out module=service status=ok was_signed_in={was_signed_in}");
        Ok(())
    }

    /// Record of the signed-in identity, or `None` when signed out.
    pub fn current_identity(&self, session: &Session) -> PlannerResult<Option<IdentityRecord>> {
        match session.identity() {
            Some(name) => Ok(self.store.get(name)?),
            None => Ok(None),
        }
    }

    /// Theme of the signed-in identity; signed-out callers get the default.
    pub fn theme(&self, session: &Session) -> PlannerResult<Theme> {
        Ok(self
            .current_identity(session)?
            .map(|record| record.settings.theme)
            .unwrap_or_default())
    }

    /// Flips the signed-in identity's theme and returns the new value.
    pub fn toggle_theme(&self, session: &Session) -> PlannerResult<Theme> {
        let (name, mut record) = load_signed_in(&self.store, session)?;
        record.settings.theme = record.settings.theme.toggled();
        self.store.set(name, &record)?;
        info!(
            "event=theme_toggle module=service status=ok theme={}",
            record.settings.theme.as_str()
        );
        Ok(record.settings.theme)
    }
}
