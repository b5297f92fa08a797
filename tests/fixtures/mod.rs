/// Error type used by tests
pub type Error = Box<dyn std::error::Error>;

/// Characters that `encode_uri` leaves unescaped
#[allow(dead_code)]
pub static URI_RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// Characters that `encode_uri_component` leaves unescaped, besides
/// alphanumerics
#[allow(dead_code)]
pub static COMPONENT_RESERVED: &str = "!'()*";

/// Unreserved characters other than alphanumerics
#[allow(dead_code)]
pub static UNRESERVED_MARKS: &str = "-._~";

/// Whether `c` passes through `encode_uri` unchanged.
#[allow(dead_code)]
pub fn passes_uri(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || URI_RESERVED.contains(c)
        || UNRESERVED_MARKS.contains(c)
}

/// Whether `c` passes through `encode_uri_component` unchanged.
#[allow(dead_code)]
pub fn passes_component(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || COMPONENT_RESERVED.contains(c)
        || UNRESERVED_MARKS.contains(c)
}

/// Percent-encodes every UTF-8 byte of `c`.
#[allow(dead_code)]
pub fn escape_all(c: char) -> String {
    c.to_string()
        .bytes()
        .map(|b| format!("%{:02X}", b))
        .collect()
}
