//! Seeded user document
//!
//! This module provides the shape of the user document the bridge inserts
//! into the application database. Field names serialize in camelCase so the
//! stored document matches what the application itself writes; `createdAt`
//! serializes as an RFC 3339 timestamp string.
//!
//! The bridge forwards seed arguments verbatim, so a caller may send a
//! subset of these fields. This struct is the canonical full shape, used by
//! test suites to build well-formed seed documents.
//!
//! # Example
//!
//! ```
//! use seedbridge_shared::models::SeedUser;
//! use chrono::{TimeZone, Utc};
//!
//! let user = SeedUser {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     password: "x".to_string(),
//!     is_email_address_confirmed: true,
//!     created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//! };
//!
//! let document = user.to_document().unwrap();
//! assert!(document.contains_key("isEmailAddressConfirmed"));
//! ```

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};

/// User document seeded into the application database
///
/// No uniqueness is enforced by this component; seeding the same user twice
/// stores two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password as the application stores it (already hashed by the caller
    /// if the application hashes; the bridge does not touch it)
    pub password: String,

    /// Whether the address counts as confirmed, so seeded users can log in
    /// without an email round trip
    pub is_email_address_confirmed: bool,

    /// Creation timestamp, stored as an RFC 3339 string
    pub created_at: DateTime<Utc>,
}

impl SeedUser {
    /// Collection the bridge seeds users into
    pub const COLLECTION: &'static str = "users";

    /// Converts the user into a BSON document ready for insertion
    ///
    /// # Errors
    ///
    /// Returns a serialization error only if a field cannot be represented
    /// as BSON, which does not happen for this shape.
    pub fn to_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }
}
