use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("service account credentials not found in the secrets store (key 'google_service_account')")]
    MissingServiceAccount,
}

/// Key-value source backing [`Settings`]. Injected so nothing reads ambient
/// global state directly; tests and embedding hosts substitute their own.
pub trait ConfigSource: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;

    /// Structured values (tables), used for the service-account blob.
    fn get_value(&self, key: &str) -> Option<Value>;
}

/// Secrets store loaded from a file with the `config` crate. The path comes
/// from `SECRETS_PATH` (default `Secrets`, any extension `config` supports).
/// A missing or unreadable file yields an empty store, so every lookup falls
/// through to the process environment.
pub struct SecretsFile {
    store: config::Config,
}

impl SecretsFile {
    pub fn load() -> Self {
        let path = std::env::var("SECRETS_PATH").unwrap_or_else(|_| "Secrets".to_string());
        let store = match config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .build()
        {
            Ok(store) => store,
            Err(e) => {
                warn!("Failed to read secrets store at '{}': {}", path, e);
                config::Config::default()
            }
        };

        SecretsFile { store }
    }
}

impl ConfigSource for SecretsFile {
    fn get_string(&self, key: &str) -> Option<String> {
        self.store.get_string(key).ok()
    }

    fn get_value(&self, key: &str) -> Option<Value> {
        self.store.get::<Value>(key).ok()
    }
}

/// In-memory source for embedding hosts that manage secrets themselves, and
/// for tests.
#[derive(Debug, Default)]
pub struct MemorySource {
    values: HashMap<String, Value>,
}

impl MemorySource {
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for MemorySource {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    fn get_value(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

/// Layered settings: the secrets store first, the process environment second,
/// caller defaults last. A secrets entry that is present but empty falls
/// through to the environment.
pub struct Settings {
    source: Box<dyn ConfigSource>,
}

impl Settings {
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Settings {
            source: Box::new(source),
        }
    }

    pub fn from_secrets_file() -> Self {
        Self::new(SecretsFile::load())
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.source
            .get_string(key)
            .filter(|value| !value.is_empty())
            .or_else(|| std::env::var(key).ok().filter(|value| !value.is_empty()))
    }

    fn get_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// API key for the chat backend. Possibly empty.
    pub fn api_key(&self) -> String {
        self.get_or("ABACUS_API_KEY", "")
    }

    pub fn model_name(&self) -> String {
        self.get_or("MODEL_NAME", "gemini-2.5-pro")
    }

    /// Drive folder to discover spreadsheets in. Empty disables discovery.
    pub fn folder_id(&self) -> String {
        self.get_or("SHEETS_FOLDER_ID", "")
    }

    /// Explicitly configured spreadsheet ids: comma-separated, whitespace
    /// trimmed, empty segments dropped. Duplicates are kept here; the loader
    /// deduplicates during resolution.
    pub fn sheet_ids(&self) -> Vec<String> {
        self.get_or("SHEETS_IDS", "")
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn sheet_range(&self) -> String {
        self.get_or("SHEET_RANGE", "A:Z")
    }

    /// The structured service-account blob, secrets store only (no
    /// environment fallback). The single fallible accessor.
    pub fn service_account(&self) -> Result<Value, ConfigError> {
        self.source
            .get_value("google_service_account")
            .ok_or(ConfigError::MissingServiceAccount)
    }

    /// `client_email` of the service account, for display to the operator
    /// (the address spreadsheets must be shared with). Empty when absent.
    pub fn service_account_email(&self) -> String {
        self.service_account()
            .ok()
            .and_then(|blob| {
                blob.get("client_email")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_secret_wins_over_default() {
        let settings = Settings::new(MemorySource::default().set("MODEL_NAME", "custom-model"));
        assert_eq!(settings.model_name(), "custom-model");
    }

    #[test]
    fn test_default_applies_when_unset() {
        let settings = Settings::new(MemorySource::default());
        assert_eq!(settings.model_name(), "gemini-2.5-pro");
        assert_eq!(settings.sheet_range(), "A:Z");
        assert_eq!(settings.folder_id(), "");
    }

    #[test]
    fn test_empty_secret_falls_through_to_environment() {
        // No other test touches ABACUS_API_KEY, so the env mutation is safe
        // under the default parallel test runner.
        std::env::set_var("ABACUS_API_KEY", "from-env");
        let settings = Settings::new(MemorySource::default().set("ABACUS_API_KEY", ""));
        assert_eq!(settings.api_key(), "from-env");
        std::env::remove_var("ABACUS_API_KEY");
    }

    #[test]
    fn test_sheet_ids_are_trimmed_and_non_empty() {
        let settings =
            Settings::new(MemorySource::default().set("SHEETS_IDS", " a , b ,, a ,c , "));
        assert_eq!(settings.sheet_ids(), vec!["a", "b", "a", "c"]);
    }

    #[test]
    fn test_sheet_ids_empty_when_unset() {
        let settings = Settings::new(MemorySource::default());
        assert!(settings.sheet_ids().is_empty());
    }

    #[test]
    fn test_service_account_is_the_only_fallible_accessor() {
        let settings = Settings::new(MemorySource::default());
        assert!(matches!(
            settings.service_account(),
            Err(ConfigError::MissingServiceAccount)
        ));
        assert_eq!(settings.service_account_email(), "");
    }

    #[test]
    fn test_service_account_email() {
        let settings = Settings::new(MemorySource::default().set(
            "google_service_account",
            json!({"client_email": "bot@example.iam.gserviceaccount.com"}),
        ));
        assert_eq!(
            settings.service_account_email(),
            "bot@example.iam.gserviceaccount.com"
        );
    }
}
