//! Byte classes for lexing

/// Space, tab, newline, vertical tab, form feed and carriage return.
pub(super) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Identifiers start with an ASCII letter; there is no underscore.
pub(super) fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

pub(super) fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}
