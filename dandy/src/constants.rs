//! The fixed input alphabet and the set of characters with special meaning
//! inside a pattern.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Returns the alphabet Σ: every character `char::is_ascii_graphic` treats as
/// printable, plus the ASCII whitespace characters, mirroring Python's
/// `string.printable` (digits, ascii letters, punctuation, space and the
/// control whitespace characters `\t\n\r\x0b\x0c`).
pub fn alphabet() -> &'static HashSet<char> {
    static ALPHABET: OnceLock<HashSet<char>> = OnceLock::new();
    ALPHABET.get_or_init(|| {
        let mut set: HashSet<char> = (0x21..=0x7e).map(|c| c as u8 as char).collect();
        set.insert(' ');
        set.extend(['\t', '\n', '\r', '\x0b', '\x0c']);
        set
    })
}

/// Characters that change meaning outside of a character set: `^ . * + ? ( )
/// [ ] { } | \`.
pub const METACHARS: [char; 13] = [
    '^', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '\\',
];

/// Characters that change meaning inside a `[...]` character set.
pub const SET_METACHARS: [char; 3] = ['[', ']', '\\'];

pub fn is_metachar(c: char) -> bool {
    METACHARS.contains(&c)
}

pub fn is_set_metachar(c: char) -> bool {
    SET_METACHARS.contains(&c)
}
