//! Classic cipher operations
//!
//! This module implements the Caesar shift cipher used by the toolkit's
//! encoder/decoder widget. The cipher is pedagogical and intentionally
//! breakable; it is not a cryptographic primitive.

pub mod caesar;

pub use caesar::{caesar, decrypt, encrypt};
