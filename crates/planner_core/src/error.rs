//! Planner error taxonomy.
//!
//! # Invariants
//! - Every failing operation leaves the stored record unchanged.
//! - Nothing in core retries; the caller decides what happens next.

use crate::model::validation::ValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PlannerResult<T> = Result<T, PlannerError>;

/// Authentication and session failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identity or credential mismatch. The two are not distinguished.
    InvalidCredentials,
    /// Operation needs a signed-in session.
    NotSignedIn,
    /// Session names an identity the store no longer holds.
    MissingIdentity(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid identity name or credential"),
            Self::NotSignedIn => write!(f, "no identity is signed in"),
            Self::MissingIdentity(name) => write!(f, "identity record not found: {name}"),
        }
    }
}

impl Error for AuthError {}

/// Top-level error returned by repositories and services.
#[derive(Debug)]
pub enum PlannerError {
    Validation(ValidationError),
    Auth(AuthError),
    DuplicateIdentity(String),
    StoreUnavailable(StoreError),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Auth(err) => write!(f, "{err}"),
            Self::DuplicateIdentity(name) => write!(f, "identity already exists: {name}"),
            Self::StoreUnavailable(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Auth(err) => Some(err),
            Self::DuplicateIdentity(_) => None,
            Self::StoreUnavailable(err) => Some(err),
        }
    }
}

impl PlannerError {
    /// Stable short code for structured log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Auth(_) => "auth",
            Self::DuplicateIdentity(_) => "duplicate_identity",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

impl From<ValidationError> for PlannerError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<AuthError> for PlannerError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<StoreError> for PlannerError {
    fn from(value: StoreError) -> Self {
        Self::StoreUnavailable(value)
    }
}
