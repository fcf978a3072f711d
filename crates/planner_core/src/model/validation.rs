//! Input validation errors shared by repositories and services.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection of caller input. The targeted record is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Event or task title is empty after trimming.
    EmptyTitle,
    /// Identity name is empty after trimming.
    EmptyIdentityName,
    /// Credential is empty.
    EmptyCredential,
    /// Month outside `1..=12`.
    InvalidMonth(u32),
    /// Year outside the supported calendar range.
    YearOutOfRange(i32),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::EmptyIdentityName => write!(f, "identity name is required"),
            Self::EmptyCredential => write!(f, "credential is required"),
            Self::InvalidMonth(month) => write!(f, "month must be within 1..=12, got {month}"),
            Self::YearOutOfRange(year) => write!(f, "year {year} is outside the supported range"),
        }
    }
}

impl Error for ValidationError {}

/// Trims a required title, rejecting blank input.
pub(crate) fn require_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{require_title, ValidationError};

    #[test]
    fn require_title_trims_and_rejects_blank() {
        assert_eq!(require_title("  Dentist ").unwrap(), "Dentist");
        assert_eq!(require_title(" \t").unwrap_err(), ValidationError::EmptyTitle);
        assert_eq!(require_title("").unwrap_err(), ValidationError::EmptyTitle);
    }
}
