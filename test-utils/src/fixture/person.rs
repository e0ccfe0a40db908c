//! Person fixtures for creating in-memory test data.

use entity::person;
use uuid::Uuid;

/// Default test person id.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x0100_0000_0000_0000_0000_0000_0000_0000);

/// Creates a person entity model with default values.
///
/// # Default Values
/// - id: `01000000-0000-0000-0000-000000000000`
/// - first_name: `"Arne"`, last_name: `"Arndt"`
/// - email: `Some("a.arndt@t-online.de")`, phone: `Some("05123 1234 5678")`
/// - all references: `None`
pub fn entity() -> person::Model {
    person::Model {
        id: DEFAULT_ID,
        first_name: "Arne".to_string(),
        last_name: "Arndt".to_string(),
        email: Some("a.arndt@t-online.de".to_string()),
        phone: Some("05123 1234 5678".to_string()),
        image_path: None,
        remote_uri_path: None,
        image_id: None,
        address_id: None,
    }
}
