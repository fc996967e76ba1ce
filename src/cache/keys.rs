//! Key Generation Module
//!
//! Produces collision-resistant identifiers for stored entries.

use uuid::Uuid;

// == Key Generator ==
/// Generates unique keys for stored entries.
///
/// Keys are uuid-v4 strings drawn from a uniform random 128-bit space.
/// No uniqueness check is performed against existing keys; the collision
/// probability is treated as negligible, not proven zero.
#[derive(Debug, Clone, Default)]
pub struct KeyGenerator;

impl KeyGenerator {
    /// Creates a new key generator.
    pub fn new() -> Self {
        Self
    }

    /// Returns a fresh key in canonical hyphenated form.
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
