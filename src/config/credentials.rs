//! Access token resolution
//!
//! The token is looked up in a fixed order: explicit `--token` flag, the
//! `GITHUB_TOKEN` and `GH_TOKEN` environment variables, then the same two keys in a
//! secondary [`CredentialSource`]. Blank values are skipped at every level.

use crate::constants;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde_yaml::{Mapping, Value};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read-only view of environment variables
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// A secondary place to find credentials once flags and environment are exhausted
///
/// Implementations may be a no-op, a file, or a platform secret manager. Returning
/// `None` means the key is not available from this source.
pub trait CredentialSource {
    fn secret(&self, key: &str) -> Option<SecretString>;
}

/// Credential source that never has anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecrets;

impl CredentialSource for NoSecrets {
    fn secret(&self, _key: &str) -> Option<SecretString> {
        None
    }
}

/// Key/value secrets stored in a YAML (or JSON) file
///
/// ```yaml
/// GITHUB_TOKEN: ghp_xxxxxxxxxxxx
/// ```
///
/// Only top-level string entries are kept; nested sections and other values are
/// skipped.
#[derive(Debug, Clone, Default)]
pub struct SecretsFile {
    values: HashMap<String, SecretString>,
}

impl SecretsFile {
    /// Load secrets from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its top level is not a map.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read secrets file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let document: Mapping = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse secrets file {}", path.display()))?;

        let values = document
            .into_iter()
            .filter_map(|(key, value)| match (key, value) {
                (Value::String(key), Value::String(value)) => {
                    Some((key, SecretString::from(value)))
                }
                _ => None,
            })
            .collect();
        Ok(Self { values })
    }

    /// Where the secrets file is expected: `$ISSUE_FANOUT_SECRETS`, else the
    /// per-user config directory
    pub fn default_path(env: &dyn EnvSource) -> Option<PathBuf> {
        if let Some(path) = env.var(constants::env::SECRETS_FILE).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| {
            dir.join(constants::secrets::APP_DIR)
                .join(constants::secrets::FILE_NAME)
        })
    }

    /// Load the secrets file from its default location
    ///
    /// The file is optional: a missing file yields an empty source, and a broken one
    /// is reported as a warning and treated as empty.
    pub fn discover(env: &dyn EnvSource) -> Self {
        let Some(path) = Self::default_path(env) else {
            return Self::default();
        };
        if !path.is_file() {
            debug!(path = %path.display(), "no secrets file");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(secrets) => secrets,
            Err(e) => {
                warn!("ignoring secrets file: {:#}", e);
                Self::default()
            }
        }
    }
}

impl CredentialSource for SecretsFile {
    fn secret(&self, key: &str) -> Option<SecretString> {
        self.values.get(key).cloned()
    }
}

/// The secrets file, discovered on the first lookup
///
/// Runs that get their token from the flag or the environment (or only show help)
/// never touch the file.
pub struct LazySecretsFile<'a> {
    env: &'a dyn EnvSource,
    loaded: OnceCell<SecretsFile>,
}

impl<'a> LazySecretsFile<'a> {
    pub fn new(env: &'a dyn EnvSource) -> Self {
        Self {
            env,
            loaded: OnceCell::new(),
        }
    }
}

impl CredentialSource for LazySecretsFile<'_> {
    fn secret(&self, key: &str) -> Option<SecretString> {
        self.loaded
            .get_or_init(|| SecretsFile::discover(self.env))
            .secret(key)
    }
}

impl CredentialSource for HashMap<String, String> {
    fn secret(&self, key: &str) -> Option<SecretString> {
        self.get(key).map(|value| SecretString::from(value.clone()))
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Resolve the access token: flag, then environment, then the secondary source
///
/// The secondary source is only consulted when nothing earlier produced a token.
pub fn resolve_token(
    flag: Option<String>,
    env: &dyn EnvSource,
    secrets: &dyn CredentialSource,
) -> Option<SecretString> {
    if let Some(token) = flag.and_then(non_blank) {
        debug!("using token from --token");
        return Some(SecretString::from(token));
    }

    for key in constants::env::TOKEN_VARS {
        if let Some(token) = env.var(key).and_then(non_blank) {
            debug!(source = key, "using token from environment");
            return Some(SecretString::from(token));
        }
    }

    for key in constants::env::TOKEN_VARS {
        if let Some(token) = secrets.secret(key) {
            if !token.expose_secret().trim().is_empty() {
                debug!(key, "using token from secrets source");
                return Some(token);
            }
        }
    }

    None
}
