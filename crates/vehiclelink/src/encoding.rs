//! URL path-segment encoding.
//!
//! Segment and variant codes are interpolated into request paths
//! (`/segments/{segment}/variants/{variant}`). Codes are plain identifiers
//! in practice, but anything outside the unreserved path characters must be
//! percent-encoded so a code can never alter the route.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be percent-encoded inside a single path segment.
const PATH_SEGMENT_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

/// Percent-encode a value for use as a single URL path segment.
///
/// # Examples
///
/// ```
/// use vehiclelink::encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("vehicles"), "vehicles");
/// assert_eq!(encode_path_segment("PRADO GXL"), "PRADO%20GXL");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
#[must_use]
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ESCAPE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_codes_pass_through() {
        for code in ["vehicles", "marine", "TOYO", "PRADO", "2015-MY"] {
            assert_eq!(encode_path_segment(code), code);
        }
    }

    #[test]
    fn spaces_are_encoded() {
        assert_eq!(encode_path_segment("Style 1"), "Style%201");
    }

    #[test]
    fn route_delimiters_are_encoded() {
        let encoded = encode_path_segment("a/b?c#d");
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('?'));
        assert!(!encoded.contains('#'));
    }

    #[test]
    fn non_ascii_is_encoded() {
        assert_eq!(encode_path_segment("vehículos"), "veh%C3%ADculos");
    }
}
