use crate::errors::{FragmentError, FragmentErrorKind};
use log::warn;

pub const FRAGMENT_TAG: char = '#';
const ESCAPE: u8 = b'%';

// marks that are left as is, on top of ASCII alphanumerics
const UNRESERVED_MARKS: &[char] = &['-', '_', '.', '!', '~', '*', '\'', '(', ')'];

pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&c)
}

/// Percent-encodes a query for storage in the location fragment, escaping
/// everything except ASCII alphanumerics and `-_.!~*'()`.
pub fn encode_fragment(query: &str) -> String {
    let mut buf = [0u8; 4];

    query
        .chars()
        .map(|c| {
            if is_unreserved(c) {
                c.to_string()
            } else {
                urlencoding::encode(c.encode_utf8(&mut buf)).into_owned()
            }
        })
        .collect()
}

/// Reverses [`encode_fragment`]. A leading `#` is ignored.
///
/// Every `%` must start a two digit hex escape and the decoded bytes must be
/// UTF-8; anything else is an error rather than being passed through.
pub fn decode_fragment(fragment: &str) -> Result<String, FragmentError> {
    let fragment = fragment.strip_prefix(FRAGMENT_TAG).unwrap_or(fragment);

    check_escapes(fragment).map_err(|e| {
        warn!("Could not decode fragment {:?}: {}", fragment, e);
        e
    })?;

    let decoded = urlencoding::decode(fragment).map_err(|e| {
        let e = FragmentError::from(e);
        warn!("Could not decode fragment {:?}: {}", fragment, e);
        e
    })?;

    Ok(decoded.into_owned())
}

pub fn check_escapes(fragment: &str) -> Result<(), FragmentError> {
    let bytes = fragment.as_bytes();

    for (pos, _) in bytes.iter().enumerate().filter(|(_, b)| **b == ESCAPE) {
        let digits = bytes.get(pos + 1..pos + 3);
        let valid = matches!(digits, Some(d) if d.iter().all(u8::is_ascii_hexdigit));

        if !valid {
            return Err(FragmentError {
                msg: "Expected two hex digits after '%'".to_string(),
                pos: pos.to_string(),
                kind: FragmentErrorKind::MalformedEscape,
            });
        }
    }

    Ok(())
}
