//! Byte classification helpers.
//!
//! Classification is ASCII-only. Non-ASCII input is never part of an
//! identifier or number; it is only measured so that a whole UTF-8 sequence
//! can be consumed as one unknown character.

/// Checks if a byte can start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use wafc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier: `[A-Za-z0-9_]`.
///
/// # Example
///
/// ```
/// use wafc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue(b'9'));
/// assert!(!is_ident_continue(b'-'));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks if a byte is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
pub fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Length of the UTF-8 sequence introduced by `first`.
///
/// Bytes that cannot start a sequence count as one character on their own.
///
/// # Example
///
/// ```
/// use wafc_lex::chars::utf8_width;
///
/// assert_eq!(utf8_width(b'a'), 1);
/// assert_eq!(utf8_width("é".as_bytes()[0]), 2);
/// assert_eq!(utf8_width("€".as_bytes()[0]), 3);
/// assert_eq!(utf8_width("😀".as_bytes()[0]), 4);
/// ```
#[inline]
pub fn utf8_width(first: u8) -> usize {
    match first {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
