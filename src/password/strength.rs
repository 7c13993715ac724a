//! Password strength analysis
//!
//! Scores an arbitrary string against a fixed rubric and estimates its
//! entropy and brute-force crack time. The analyzer is settings-agnostic:
//! character classes are inferred purely from the password's content.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbol class recognized by the analyzer.
///
/// Deliberately wider than the generator's symbol set; the rubric accepts
/// symbols the generator never emits.
pub const ANALYZER_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Class space contributed by a symbol, for the entropy estimate
const SYMBOL_SPACE: u32 = 32;

/// Assumed attacker speed in guesses per second
const GUESSES_PER_SECOND: f64 = 2e9;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86400.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// The named boolean predicates of the scoring rubric
///
/// Each passed check contributes one point to the score. The two length
/// checks overlap on purpose: a 12-character password earns both, and a
/// 16-character one additionally earns an unnamed bonus point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthChecks {
    /// At least 8 characters
    pub min_length: bool,
    /// Contains an uppercase ASCII letter
    pub uppercase: bool,
    /// Contains a lowercase ASCII letter
    pub lowercase: bool,
    /// Contains a digit
    pub digits: bool,
    /// Contains a symbol from [`ANALYZER_SYMBOLS`]
    pub symbols: bool,
    /// No run of 3 or more identical consecutive characters
    pub no_repeats: bool,
    /// At least 12 characters
    pub long_length: bool,
}

impl StrengthChecks {
    /// Number of passed checks
    pub fn passed(&self) -> u8 {
        [
            self.min_length,
            self.uppercase,
            self.lowercase,
            self.digits,
            self.symbols,
            self.no_repeats,
            self.long_length,
        ]
        .iter()
        .filter(|&&check| check)
        .count() as u8
    }
}

/// Strength classification derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Map a score in `[0, 8]` to its label
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => Self::VeryStrong,
            5..=6 => Self::Strong,
            3..=4 => Self::Medium,
            1..=2 => Self::Weak,
            0 => Self::VeryWeak,
        }
    }

    /// Display string for hosts
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a strength analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Total score in `[0, 8]`: one point per passed check plus a bonus
    /// point at 16+ characters
    pub score: u8,
    /// Classification of the score
    pub label: StrengthLabel,
    /// Individual rubric checks
    pub checks: StrengthChecks,
    /// Estimated entropy in bits, rounded to the nearest integer
    pub entropy_bits: u32,
    /// Human-readable brute-force duration estimate
    pub crack_time: String,
}

/// Analyze the strength of `password`.
///
/// Total over all inputs including the empty string, which yields the
/// weakest possible report.
///
/// # Example
/// ```
/// use cstoolkit::{analyze_strength, StrengthLabel};
///
/// let report = analyze_strength("Passw0rd!");
/// assert_eq!(report.score, 6);
/// assert_eq!(report.label, StrengthLabel::Strong);
/// ```
pub fn analyze_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let checks = StrengthChecks {
        min_length: length >= 8,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        digits: password.chars().any(|c| c.is_ascii_digit()),
        symbols: password.chars().any(|c| ANALYZER_SYMBOLS.contains(c)),
        no_repeats: !has_triple_repeat(password),
        long_length: length >= 12,
    };

    let mut score = checks.passed();
    if length >= 16 {
        score += 1;
    }
    let score = score.min(8);

    let space = class_space(password);
    let entropy_bits = if space == 0 {
        0
    } else {
        (f64::from(space).log2() * length as f64).round() as u32
    };

    let combinations = f64::from(space).powi(length as i32);
    let seconds = combinations / GUESSES_PER_SECOND;

    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        checks,
        entropy_bits,
        crack_time: format_crack_time(seconds),
    }
}

/// Sum of class sizes for every class present in the password
fn class_space(password: &str) -> u32 {
    let mut space = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        space += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        space += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        space += 10;
    }
    if password.chars().any(|c| ANALYZER_SYMBOLS.contains(c)) {
        space += SYMBOL_SPACE;
    }
    space
}

/// True when the password contains a run of 3+ identical characters
fn has_triple_repeat(password: &str) -> bool {
    let mut run = 0;
    let mut previous = None;

    for c in password.chars() {
        if Some(c) == previous {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }

    false
}

/// Map a crack duration in seconds to its coarsest applicable unit
fn format_crack_time(seconds: f64) -> String {
    if seconds < SECONDS_PER_MINUTE {
        "under a minute".to_string()
    } else if seconds < SECONDS_PER_HOUR {
        format!("{} minutes", (seconds / SECONDS_PER_MINUTE).round() as u64)
    } else if seconds < SECONDS_PER_DAY {
        format!("{} hours", (seconds / SECONDS_PER_HOUR).round() as u64)
    } else if seconds < SECONDS_PER_YEAR {
        format!("{} days", (seconds / SECONDS_PER_DAY).round() as u64)
    } else {
        let years = seconds / SECONDS_PER_YEAR;
        if years > 1_000_000.0 {
            "millions of years".to_string()
        } else {
            format!("{} years", years.round() as u64)
        }
    }
}
