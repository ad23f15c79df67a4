use std::sync::atomic::{AtomicUsize, Ordering};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub mod assets;
pub mod persistence;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Session-scoped id for ephemeral UI entries (toasts). Records that outlive
/// the session use `record_id` instead.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Collision-safe id for saved records; survives restarts, unlike the
/// session counter.
pub fn record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Date label stamped on saved records, e.g. "2026-08-06".
pub fn saved_at_label() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
        .chars()
        .take(10)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let first = generate_id("toast");
        let second = generate_id("toast");
        assert!(first.starts_with("toast-"));
        assert_ne!(first, second);
    }

    #[test]
    fn record_ids_do_not_collide() {
        assert_ne!(record_id(), record_id());
    }

    #[test]
    fn saved_at_label_is_a_date() {
        let label = saved_at_label();
        assert_eq!(label.len(), 10);
        assert_eq!(label.chars().filter(|ch| *ch == '-').count(), 2);
    }
}
