//! Password generation and strength analysis
//!
//! This module covers the generator side (charset composition and uniform
//! random selection) and the analyzer side (scoring rubric, entropy and
//! crack-time estimates). The two sides are independent: the analyzer
//! infers character classes from content and never sees the generation
//! settings.

pub mod charset;
pub mod generate;
pub mod strength;

pub use charset::{build_charset, GenerationSettings};
pub use generate::{generate_password, generate_password_with};
pub use strength::{analyze_strength, StrengthChecks, StrengthLabel, StrengthReport};
