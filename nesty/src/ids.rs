//! Entity id allocation.

use uuid::Uuid;

/// Generate a UUIDv7 (time-ordered, globally unique).
///
/// Called once per created entity. Ids are never reused, so a fresh id is
/// unique across the forest without an active collision check.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
