//! Opaque identifier generation

use uuid::Uuid;

/// Generates identifiers for principals
pub struct IdGenerator;

impl IdGenerator {
    /// Generate a new globally unique identifier
    ///
    /// The result is a 32 character lowercase hex string with no separators,
    /// safe to embed in URLs and storage keys.
    pub fn new_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Check whether a string has the shape produced by [`IdGenerator::new_id`]
    pub fn is_valid(id: &str) -> bool {
        id.len() == 32 && Uuid::try_parse(id).is_ok()
    }
}
