use uuid::Uuid;

/// Returns the first eight characters of an id for compact log lines.
///
/// # Arguments
/// - `id` - The id to shorten
///
/// # Returns
/// - `String` - The leading eight hex characters, e.g. `01000000`
pub fn short_id(id: &Uuid) -> String {
    let mut value = id.to_string();
    value.truncate(8);
    value
}
