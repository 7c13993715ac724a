//! Charset composition from character-class flags

use serde::{Deserialize, Serialize};

use crate::DEFAULT_PASSWORD_LENGTH;

/// Uppercase letter class (26 characters)
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letter class (26 characters)
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit class (10 characters)
pub const NUMBERS: &str = "0123456789";

/// Symbol class used by the generator (26 characters)
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters visually confusable with one another
pub const AMBIGUOUS: &str = "0O1lI";

/// Settings for password generation
///
/// One profile of the generator widget. At least one `include_*` flag must
/// be set for [`build_charset`] to produce a non-empty charset; an empty
/// charset is a defined condition that callers check before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Password length in characters
    pub length: usize,
    /// Include uppercase letters (A-Z)
    pub include_uppercase: bool,
    /// Include lowercase letters (a-z)
    pub include_lowercase: bool,
    /// Include digits (0-9)
    pub include_numbers: bool,
    /// Include symbols (!@#$...)
    pub include_symbols: bool,
    /// Strip ambiguous characters (0, O, 1, l, I) from the charset
    pub exclude_ambiguous: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// Build the selectable charset for the given settings.
///
/// Enabled classes are concatenated in fixed order: uppercase, lowercase,
/// numbers, symbols. When `exclude_ambiguous` is set, every occurrence of
/// an ambiguous character is stripped from the concatenation regardless of
/// which class contributed it.
///
/// The result is empty when no class is enabled. That is not an error
/// here; generation against the empty charset fails with
/// [`ToolkitError::EmptyCharset`](crate::ToolkitError::EmptyCharset).
pub fn build_charset(settings: &GenerationSettings) -> String {
    let mut charset = String::new();

    if settings.include_uppercase {
        charset.push_str(UPPERCASE);
    }
    if settings.include_lowercase {
        charset.push_str(LOWERCASE);
    }
    if settings.include_numbers {
        charset.push_str(NUMBERS);
    }
    if settings.include_symbols {
        charset.push_str(SYMBOLS);
    }

    if settings.exclude_ambiguous {
        charset.retain(|c| !AMBIGUOUS.contains(c));
    }

    charset
}
