//! Utility functions

pub mod common;
pub mod id_gen;

pub use common::{mask_string, now};
pub use id_gen::generate_account_id;
