//! Planner domain model.
//!
//! # Responsibility
//! - Define the per-identity record and the events/tasks it owns.
//! - Normalize and validate caller input before it reaches the store.
//!
//! # Invariants
//! - Every event and task carries a stable id that is never reused.
//! - Titles are trimmed and never empty once persisted.

pub mod event;
pub mod identity;
pub mod task;
pub mod validation;

/// Trims `value` and maps blank input to `None`.
///
/// Form fields arrive as empty strings when left untouched; storing them as
/// absent keeps `Option` meaningful for readers.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::normalize_optional;

    #[test]
    fn normalize_optional_drops_blank_values() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" work ".to_string())).as_deref(),
            Some("work")
        );
    }
}
