//! # CyberSec Toolkit Core
//!
//! The algorithmic core of an educational security toolkit: a Caesar
//! cipher, a configurable password generator (single and multi-account),
//! and a password-strength analyzer.
//!
//! ## Features
//!
//! - Caesar cipher with per-case rotation and full key wraparound
//! - Charset composition from character-class flags with optional
//!   ambiguous-character exclusion
//! - Uniform random password generation over a derived charset
//! - Strength scoring with entropy and brute-force crack-time estimates
//! - Multi-account registry of independent generation profiles
//!
//! ## Example
//!
//! ```
//! use cstoolkit::{build_charset, generate_password, analyze_strength, GenerationSettings};
//!
//! let settings = GenerationSettings::default();
//! let charset = build_charset(&settings);
//! let password = generate_password(&charset, settings.length).unwrap();
//! assert_eq!(password.chars().count(), 16);
//!
//! let report = analyze_strength(&password);
//! println!("{}: {} bits", report.label, report.entropy_bits);
//! ```

pub mod accounts;
pub mod cipher;
pub mod error;
pub mod password;
pub mod utils;

// Re-export main types
pub use error::{Result, ToolkitError};
pub use cipher::{caesar, decrypt, encrypt};
pub use password::{
    analyze_strength, build_charset, generate_password, generate_password_with,
    GenerationSettings, StrengthChecks, StrengthLabel, StrengthReport,
};
pub use accounts::{Account, AccountRegistry, BatchOutcome};

/// Minimum password length offered by the generator UI
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length offered by the generator UI
pub const PASSWORD_MAX_LENGTH: usize = 50;

/// Default password length for new generation profiles
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Minimum Caesar key offered by the cipher UI
pub const CAESAR_KEY_MIN: i32 = 1;

/// Maximum Caesar key offered by the cipher UI
pub const CAESAR_KEY_MAX: i32 = 25;

/// Account ID length (32 characters, UUID-derived)
pub const ACCOUNT_ID_LENGTH: usize = 32;
