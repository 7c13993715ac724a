//! Uniform random password generation

use rand::Rng;

use crate::error::{Result, ToolkitError};

/// Generate a random password of `length` characters from `charset`.
///
/// Each character is drawn independently and uniformly with replacement,
/// so repeats are expected and legal. The charset is typically produced by
/// [`build_charset`](crate::build_charset).
///
/// # Errors
/// Returns [`ToolkitError::EmptyCharset`] when `charset` is empty.
///
/// # Example
/// ```
/// use cstoolkit::generate_password;
///
/// let password = generate_password("abc123", 10).unwrap();
/// assert_eq!(password.len(), 10);
/// assert!(password.chars().all(|c| "abc123".contains(c)));
/// ```
pub fn generate_password(charset: &str, length: usize) -> Result<String> {
    let mut rng = rand::rng();
    generate_password_with(&mut rng, charset, length)
}

/// Generate a password using the supplied random source.
///
/// Takes the RNG so callers can drive generation from a seeded generator
/// for reproducible tests.
pub fn generate_password_with<R: Rng>(rng: &mut R, charset: &str, length: usize) -> Result<String> {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return Err(ToolkitError::EmptyCharset);
    }

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng.random_range(0..chars.len());
        password.push(chars[idx]);
    }

    Ok(password)
}
