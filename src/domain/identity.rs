//! Human-readable document identity.
//!
//! A document's tag is its type's short code followed by the store-assigned
//! id, zero-padded to [`TAG_ID_WIDTH`] digits. Ids wider than that are never
//! truncated.

/// Minimum number of digits of the id part of a tag.
pub const TAG_ID_WIDTH: usize = 5;

/// Renders `n` as decimal digits left-padded with `'0'` to at least `width`.
pub fn zero_pad(n: u64, width: usize) -> String {
    format!("{n:0width$}")
}

/// Builds the tag for a document, e.g. `TST00001`.
pub fn tag(short_code: &str, id: u64) -> String {
    format!("{short_code}{}", zero_pad(id, TAG_ID_WIDTH))
}

/// Tag followed by a single space and the title.
pub fn full_title(tag: &str, title: &str) -> String {
    format!("{tag} {title}")
}
