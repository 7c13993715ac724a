//! Account registry operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::password::{build_charset, generate_password, GenerationSettings};
use crate::utils::{generate_account_id, now};

/// One named generation profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque unique id, assigned by the registry
    pub id: String,
    /// Display label, may be empty
    pub name: String,
    /// Generation settings for this account
    pub settings: GenerationSettings,
    /// Last generated password, empty when none has been generated
    pub password: String,
    /// Creation instant
    pub created: DateTime<Utc>,
}

impl Account {
    fn new() -> Self {
        Self {
            id: generate_account_id(),
            name: String::new(),
            settings: GenerationSettings::default(),
            password: String::new(),
            created: now(),
        }
    }
}

/// Outcome of one account's generation within a batch
#[derive(Debug)]
pub struct BatchOutcome {
    /// Id of the account the outcome belongs to
    pub account_id: String,
    /// The generated password, or the per-account failure
    pub result: Result<String>,
}

/// Ordered collection of generation profiles
///
/// Accounts keep insertion order (the display order) and the registry
/// never holds fewer than one account: it seeds itself with an
/// empty-named default profile and refuses to remove the last entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Create a registry seeded with one default account
    pub fn new() -> Self {
        Self {
            accounts: vec![Account::new()],
        }
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts, always at least 1
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Always false; the registry is never empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Look up an account by id
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// Append a new account with default settings and a fresh id
    pub fn add_account(&mut self) -> &Account {
        self.accounts.push(Account::new());
        self.accounts.last().unwrap()
    }

    /// Remove the account with the given id.
    ///
    /// A no-op returning false when the id is unknown or only one account
    /// remains; the registry never drops below one entry.
    pub fn remove_account(&mut self, id: &str) -> bool {
        if self.accounts.len() <= 1 {
            return false;
        }

        let before = self.accounts.len();
        self.accounts.retain(|account| account.id != id);
        self.accounts.len() < before
    }

    /// Set the display name of an account.
    ///
    /// Returns false (no-op) when the id is unknown.
    pub fn rename_account(&mut self, id: &str, name: &str) -> bool {
        match self.account_mut(id) {
            Some(account) => {
                account.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Patch the settings of an account in place.
    ///
    /// Returns false (no-op) when the id is unknown.
    pub fn update_settings(&mut self, id: &str, patch: impl FnOnce(&mut GenerationSettings)) -> bool {
        match self.account_mut(id) {
            Some(account) => {
                patch(&mut account.settings);
                true
            }
            None => false,
        }
    }

    /// Generate a password for one account and store it on the account.
    ///
    /// Returns `None` when the id is unknown. On an empty charset the
    /// stored password is left untouched and the error is returned to the
    /// caller for display.
    pub fn generate_for(&mut self, id: &str) -> Option<Result<String>> {
        let account = self.account_mut(id)?;
        let charset = build_charset(&account.settings);

        Some(match generate_password(&charset, account.settings.length) {
            Ok(password) => {
                account.password = password.clone();
                Ok(password)
            }
            Err(err) => Err(err),
        })
    }

    /// Generate passwords for every account independently.
    ///
    /// Failures are isolated per account: an account whose charset is
    /// empty gets an empty stored password and a failed outcome, and the
    /// batch continues with the remaining accounts.
    pub fn generate_all(&mut self) -> Vec<BatchOutcome> {
        let mut outcomes = Vec::with_capacity(self.accounts.len());

        for account in &mut self.accounts {
            let charset = build_charset(&account.settings);
            let result = generate_password(&charset, account.settings.length);

            match &result {
                Ok(password) => account.password = password.clone(),
                Err(_) => account.password.clear(),
            }

            outcomes.push(BatchOutcome {
                account_id: account.id.clone(),
                result,
            });
        }

        outcomes
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolkitError;
    use crate::ACCOUNT_ID_LENGTH;

    fn disable_all_classes(settings: &mut GenerationSettings) {
        settings.include_uppercase = false;
        settings.include_lowercase = false;
        settings.include_numbers = false;
        settings.include_symbols = false;
    }

    #[test]
    fn test_new_registry_is_seeded() {
        let registry = AccountRegistry::new();
        assert_eq!(registry.len(), 1);
        let account = &registry.accounts()[0];
        assert!(account.name.is_empty());
        assert!(account.password.is_empty());
        assert_eq!(account.settings, GenerationSettings::default());
        assert_eq!(account.id.len(), ACCOUNT_ID_LENGTH);
    }

    #[test]
    fn test_add_account() {
        let mut registry = AccountRegistry::new();
        let first_id = registry.accounts()[0].id.clone();
        let second_id = registry.add_account().id.clone();

        assert_eq!(registry.len(), 2);
        assert_ne!(first_id, second_id);
        // Insertion order preserved
        assert_eq!(registry.accounts()[1].id, second_id);
    }

    #[test]
    fn test_remove_last_account_is_noop() {
        let mut registry = AccountRegistry::new();
        let id = registry.accounts()[0].id.clone();
        assert!(!registry.remove_account(&id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_account() {
        let mut registry = AccountRegistry::new();
        let first_id = registry.accounts()[0].id.clone();
        registry.add_account();

        assert!(registry.remove_account(&first_id));
        assert_eq!(registry.len(), 1);
        assert!(registry.account(&first_id).is_none());

        // Back down to one: removal refuses again
        let remaining_id = registry.accounts()[0].id.clone();
        assert!(!registry.remove_account(&remaining_id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut registry = AccountRegistry::new();
        registry.add_account();
        assert!(!registry.remove_account("no-such-id"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_rename_account() {
        let mut registry = AccountRegistry::new();
        let id = registry.accounts()[0].id.clone();

        assert!(registry.rename_account(&id, "GitHub"));
        assert_eq!(registry.account(&id).unwrap().name, "GitHub");
        assert!(!registry.rename_account("no-such-id", "ignored"));
    }

    #[test]
    fn test_update_settings() {
        let mut registry = AccountRegistry::new();
        let id = registry.accounts()[0].id.clone();

        assert!(registry.update_settings(&id, |settings| {
            settings.length = 24;
            settings.exclude_ambiguous = true;
        }));

        let settings = &registry.account(&id).unwrap().settings;
        assert_eq!(settings.length, 24);
        assert!(settings.exclude_ambiguous);
        assert!(!registry.update_settings("no-such-id", |_| {}));
    }

    #[test]
    fn test_generate_for() {
        let mut registry = AccountRegistry::new();
        let id = registry.accounts()[0].id.clone();

        let password = registry.generate_for(&id).unwrap().unwrap();
        assert_eq!(password.chars().count(), 16);
        assert_eq!(registry.account(&id).unwrap().password, password);
    }

    #[test]
    fn test_generate_for_unknown_id() {
        let mut registry = AccountRegistry::new();
        assert!(registry.generate_for("no-such-id").is_none());
    }

    #[test]
    fn test_generate_for_empty_charset_keeps_old_password() {
        let mut registry = AccountRegistry::new();
        let id = registry.accounts()[0].id.clone();

        let old = registry.generate_for(&id).unwrap().unwrap();
        registry.update_settings(&id, disable_all_classes);

        let result = registry.generate_for(&id).unwrap();
        assert_eq!(result, Err(ToolkitError::EmptyCharset));
        assert_eq!(registry.account(&id).unwrap().password, old);
    }

    #[test]
    fn test_generate_all_isolates_failures() {
        let mut registry = AccountRegistry::new();
        let good_id = registry.accounts()[0].id.clone();
        let bad_id = registry.add_account().id.clone();
        registry.update_settings(&bad_id, disable_all_classes);

        let outcomes = registry.generate_all();
        assert_eq!(outcomes.len(), 2);

        assert_eq!(outcomes[0].account_id, good_id);
        assert!(outcomes[0].result.is_ok());
        assert!(!registry.account(&good_id).unwrap().password.is_empty());

        assert_eq!(outcomes[1].account_id, bad_id);
        assert_eq!(outcomes[1].result, Err(ToolkitError::EmptyCharset));
        assert!(registry.account(&bad_id).unwrap().password.is_empty());
    }

    #[test]
    fn test_generate_all_overwrites_failed_account_password() {
        // A previously generated password is dropped when the account's
        // charset has since become empty, matching the widget's bulk path
        let mut registry = AccountRegistry::new();
        let id = registry.accounts()[0].id.clone();
        registry.add_account();

        registry.generate_for(&id).unwrap().unwrap();
        registry.update_settings(&id, disable_all_classes);
        registry.generate_all();

        assert!(registry.account(&id).unwrap().password.is_empty());
    }

    #[test]
    fn test_accounts_are_independent() {
        let mut registry = AccountRegistry::new();
        let first_id = registry.accounts()[0].id.clone();
        let second_id = registry.add_account().id.clone();

        registry.update_settings(&first_id, |settings| settings.length = 8);
        registry.update_settings(&second_id, |settings| settings.length = 50);
        registry.generate_all();

        assert_eq!(registry.account(&first_id).unwrap().password.chars().count(), 8);
        assert_eq!(registry.account(&second_id).unwrap().password.chars().count(), 50);
    }
}
