//! ID generation utilities

/// Generate an account ID (32 characters, UUID-derived)
pub fn generate_account_id() -> String {
    uuid::Uuid::new_v4().to_string().replace("-", "")
}
