//! Test helpers for generating unique test data
//!
//! ULID-based ids keep fixtures from colliding when tests share a store.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("breed");
/// let id2 = unique_str("breed");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("breed-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
