//! Caesar shift cipher
//!
//! Rotates ASCII letters within their own case's 26-letter alphabet;
//! every other character passes through unchanged.

/// Apply the Caesar cipher to `text`.
///
/// Letters rotate by `+key` positions when `encrypting`, `-key` when not,
/// wrapping modulo 26 within their own case. The key may be any integer;
/// values outside `[1, 25]` wrap around via the euclidean remainder, so
/// `caesar(text, 27, true)` equals `caesar(text, 1, true)`.
///
/// # Example
/// ```
/// use cstoolkit::cipher::caesar;
///
/// assert_eq!(caesar("Hello World", 3, true), "Khoor Zruog");
/// assert_eq!(caesar("Khoor Zruog", 3, false), "Hello World");
/// ```
pub fn caesar(text: &str, key: i32, encrypting: bool) -> String {
    let direction = if encrypting { key } else { -key };
    text.chars().map(|c| shift_char(c, direction)).collect()
}

/// Encrypt `text` with the given key
pub fn encrypt(text: &str, key: i32) -> String {
    caesar(text, key, true)
}

/// Decrypt `text` with the given key
pub fn decrypt(text: &str, key: i32) -> String {
    caesar(text, key, false)
}

fn shift_char(c: char, direction: i32) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };

    let offset = (c as i32 - base as i32 + direction).rem_euclid(26);
    (base + offset as u8) as char
}
