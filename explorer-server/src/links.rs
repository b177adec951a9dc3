//! External URL generation.
//!
//! Place cards link to a Google Maps search for the place name, and places
//! without an image get a placeholder image with their name as text.

/// Percent-encode a string as a URL query component.
///
/// Leaves ASCII letters, digits and `-_.!~*'()` unescaped, and encodes
/// everything else as UTF-8 bytes.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Generate a Google Maps search URL for a place name.
///
/// # Example
///
/// ```
/// use explorer_server::links::maps_search_url;
///
/// assert_eq!(
///     maps_search_url("Din Tai Fung"),
///     "https://www.google.com/maps/search/?api=1&query=Din%20Tai%20Fung"
/// );
/// ```
pub fn maps_search_url(name: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode_component(name)
    )
}

/// Number of name characters shown on a placeholder image.
const PLACEHOLDER_TEXT_CHARS: usize = 10;

/// Generate a placeholder image URL showing the start of a place name.
pub fn placeholder_image_url(name: &str) -> String {
    let text: String = name.chars().take(PLACEHOLDER_TEXT_CHARS).collect();
    format!(
        "https://placehold.co/600x400?text={}",
        encode_component(&text)
    )
}
