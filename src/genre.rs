//! Genre-name normalization shared by the query service and the client.
//!
//! The stored genre labels are free-form ("Kids' TV", "TV Action"), while
//! callers send whatever casing and punctuation the URL carried. Both sides
//! must reduce to the same canonical form or a lookup silently misses, so
//! this is the single normalization function for the whole system.

/// Canonicalize a genre name: lowercase, drop non-alphanumerics, collapse
/// runs of whitespace to a single space, trim.
pub fn normalize(genre: &str) -> String {
    let mut out = String::with_capacity(genre.len());
    let mut pending_space = false;
    for c in genre.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else if c.is_whitespace() {
            pending_space = true;
        }
        // Other punctuation is dropped without producing a space, so
        // "Kids' TV" and "kids tv" meet at the same form.
    }
    out
}
