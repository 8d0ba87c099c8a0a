//! Case-insensitive name matching across CRM records.
//!
//! The upstream sheet has no foreign keys; leads, interactions, and
//! bookings join on customer name alone. The join is trimmed,
//! case-insensitive, exact equality. Duplicate names collide, a known
//! fragility of the data model that the aggregators inherit rather than
//! paper over.

/// Normalizes a customer name for joining.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether two customer names refer to the same record.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
