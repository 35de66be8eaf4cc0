// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026
//
//! Keystore settings: built-in defaults, the optional YAML file, and command line overrides
//

use log::info;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::CliOptions;
use crate::error::{Error, Result};

pub const DEFAULT_KEYSTORE: &str = "android/app/login.jks";
pub const DEFAULT_ALIAS: &str = "test";
pub const DEFAULT_PASSWORD: &str = "loginhanapp";
pub const DEFAULT_KEYTOOL: &str = "keytool";

/// Everything needed to export the certificate of one keystore entry.
#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct KeystoreConfig {
    pub keystore: PathBuf,
    pub alias: String,
    pub store_password: String,
    pub key_password: String,
    pub keytool: PathBuf,
}

impl Default for KeystoreConfig {
    fn default() -> Self {
        Self {
            keystore: DEFAULT_KEYSTORE.into(),
            alias: DEFAULT_ALIAS.to_string(),
            store_password: DEFAULT_PASSWORD.to_string(),
            key_password: DEFAULT_PASSWORD.to_string(),
            keytool: DEFAULT_KEYTOOL.into(),
        }
    }
}

// passwords must not end up in log output
impl fmt::Debug for KeystoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeystoreConfig")
            .field("keystore", &self.keystore)
            .field("alias", &self.alias)
            .field("store_password", &"***")
            .field("key_password", &"***")
            .field("keytool", &self.keytool)
            .finish()
    }
}

impl KeystoreConfig {
    /// Reads a YAML configuration file.
    ///
    /// Keys missing in the file keep their default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains unknown keys or invalid YAML.
    pub fn read_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // an empty document or a plain `~` is null, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Option<Self>>(content).map(Option::unwrap_or_default)
    }

    /// Builds the configuration for this run.
    ///
    /// Starts from the defaults or the configuration file given with `--config` and applies the
    /// command line options on top.
    pub fn from_cli(opt: &CliOptions) -> Result<Self> {
        let mut config = match &opt.config {
            Some(path) => {
                info!("Reading keystore settings from '{}'", path.display());
                Self::read_yaml_file(path)?
            }
            None => Self::default(),
        };
        config.apply_cli(opt);
        Ok(config)
    }

    fn apply_cli(&mut self, opt: &CliOptions) {
        if let Some(keystore) = &opt.keystore {
            self.keystore.clone_from(keystore);
        }
        if let Some(alias) = &opt.alias {
            self.alias.clone_from(alias);
        }
        if let Some(storepass) = &opt.storepass {
            self.store_password.clone_from(storepass);
            // keytool uses the store password for the key unless told otherwise
            if opt.keypass.is_none() {
                self.key_password.clone_from(storepass);
            }
        }
        if let Some(keypass) = &opt.keypass {
            self.key_password.clone_from(keypass);
        }
        if let Some(keytool) = &opt.keytool {
            self.keytool.clone_from(keytool);
        }
    }
}
