//! Multi-account password generation
//!
//! This module provides the registry of named generation profiles used by
//! the multi-account widget. Each account carries its own settings; the
//! registry adds a collection contract, not a new algorithm.

pub mod registry;

pub use registry::{Account, AccountRegistry, BatchOutcome};
