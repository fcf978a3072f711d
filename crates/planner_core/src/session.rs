//! Session context.
//!
//! The application owns one `Session` and hands it to every repository call.
//! Nothing in core keeps an ambient "current user"; the durable pointer in the
//! store only exists so a new process can restore the last session.

use crate::error::AuthError;

/// Sign-in state of the running application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn(String),
}

impl Session {
    /// Name of the signed-in identity, if any.
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn(name) => Some(name.as_str()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// Name of the signed-in identity, or `AuthError::NotSignedIn`.
    pub fn require_identity(&self) -> Result<&str, AuthError> {
        self.identity().ok_or(AuthError::NotSignedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::error::AuthError;

    #[test]
    fn signed_out_session_has_no_identity() {
        let session = Session::default();
        assert_eq!(session, Session::SignedOut);
        assert!(!session.is_signed_in());
        assert_eq!(session.require_identity(), Err(AuthError::NotSignedIn));
    }

    #[test]
    fn signed_in_session_exposes_name() {
        let session = Session::SignedIn("alice".to_string());
        assert_eq!(session.identity(), Some("alice"));
        assert_eq!(session.require_identity(), Ok("alice"));
    }
}
