// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026

use log::debug;
use std::{ffi::OsString, io::ErrorKind, process::Command};

use crate::config::KeystoreConfig;
use crate::error::{Error, Result};

/// Source of the DER encoded certificate of a keystore entry.
pub trait CertExporter {
    /// Export the certificate of the entry `config.alias` in `config.keystore`.
    ///
    /// # Errors
    ///
    /// Returns an error if the exporting tool cannot be run or reports a failure.
    fn export_cert(&self, config: &KeystoreConfig) -> Result<Vec<u8>>;
}

/// Exports certificates with `keytool -exportcert`.
///
/// Blocks until the keytool process terminates. No timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct Keytool;

const MASK: &str = "****";

impl Keytool {
    fn args(config: &KeystoreConfig) -> Vec<OsString> {
        vec![
            "-exportcert".into(),
            "-alias".into(),
            config.alias.as_str().into(),
            "-keystore".into(),
            config.keystore.as_os_str().into(),
            "-storepass".into(),
            config.store_password.as_str().into(),
            "-keypass".into(),
            config.key_password.as_str().into(),
        ]
    }

    /// Command line for log messages, passwords masked
    fn display_cmdline(config: &KeystoreConfig) -> String {
        let mut line = vec![config.keytool.display().to_string()];
        let mut mask_next = false;
        for arg in Self::args(config) {
            if mask_next {
                line.push(MASK.to_string());
            } else {
                line.push(arg.to_string_lossy().into_owned());
            }
            mask_next = arg == "-storepass" || arg == "-keypass";
        }
        line.join(" ")
    }
}

impl CertExporter for Keytool {
    fn export_cert(&self, config: &KeystoreConfig) -> Result<Vec<u8>> {
        debug!("Run '{}'", Self::display_cmdline(config));
        // output() closes stdin, keytool must not prompt for passwords
        let output = Command::new(&config.keytool)
            .args(Self::args(config))
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => Error::KeytoolNotFound {
                    program: config.keytool.clone(),
                    source,
                },
                _ => Error::KeytoolSpawn {
                    program: config.keytool.clone(),
                    source,
                },
            })?;
        debug!(
            "keytool finished with {}: {} bytes stdout, {} bytes stderr",
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );

        if !output.status.success() {
            return Err(Error::KeytoolFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output.stdout)
    }
}
