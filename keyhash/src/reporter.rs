// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026

use log::info;

use crate::config::KeystoreConfig;
use crate::digest::KeyHash;
use crate::keytool::CertExporter;
use crate::report::Outcome;

/// Computes the key hash of the certificate in a keystore.
#[derive(Debug)]
pub struct KeyHashReporter<'a, E> {
    config: &'a KeystoreConfig,
    exporter: E,
}

impl<'a, E: CertExporter> KeyHashReporter<'a, E> {
    pub fn new(config: &'a KeystoreConfig, exporter: E) -> Self {
        Self { config, exporter }
    }

    /// Runs the export and hashes the certificate.
    ///
    /// Never fails, every problem is part of the returned [`Outcome`]. The exporter is not
    /// invoked if the keystore does not exist.
    pub fn run(&self) -> Outcome {
        let keystore = &self.config.keystore;
        if !keystore.exists() {
            info!("No keystore at '{}', nothing to hash", keystore.display());
            return Outcome::KeystoreNotFound {
                keystore: keystore.clone(),
            };
        }

        match self.exporter.export_cert(self.config) {
            Ok(der) => {
                let hash = KeyHash::from_cert(&der);
                info!(
                    "Certificate of '{}' ({} bytes) SHA1: {:#}",
                    self.config.alias,
                    der.len(),
                    hash.fingerprint()
                );
                Outcome::KeyHash {
                    keystore: keystore.clone(),
                    alias: self.config.alias.clone(),
                    hash,
                }
            }
            Err(e) => Outcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;
    use crate::error::{Error, KeyHashExitCode, Result};

    /// Returns canned keytool results and counts the invocations.
    struct FakeExporter {
        calls: Cell<usize>,
        result: fn() -> Result<Vec<u8>>,
    }

    impl FakeExporter {
        fn new(result: fn() -> Result<Vec<u8>>) -> Self {
            Self {
                calls: Cell::new(0),
                result,
            }
        }
    }

    impl CertExporter for &FakeExporter {
        fn export_cert(&self, config: &KeystoreConfig) -> Result<Vec<u8>> {
            assert!(config.keystore.exists());
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    fn keystore_config(keystore: &tempfile::NamedTempFile) -> KeystoreConfig {
        KeystoreConfig {
            keystore: keystore.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_keystore_skips_export() {
        let exporter = FakeExporter::new(|| Ok(vec![1, 2, 3]));
        let config = KeystoreConfig {
            keystore: "/nonexistent/android/app/login.jks".into(),
            ..Default::default()
        };

        let outcome = KeyHashReporter::new(&config, &exporter).run();
        assert!(matches!(
            &outcome,
            Outcome::KeystoreNotFound { keystore } if keystore == &config.keystore
        ));
        assert_eq!(outcome.exit_code(), KeyHashExitCode::Success);
        assert_eq!(exporter.calls.get(), 0);
    }

    #[test]
    fn hash_of_exported_cert() {
        let keystore = tempfile::NamedTempFile::new().unwrap();
        let config = keystore_config(&keystore);
        let exporter = FakeExporter::new(|| Ok(vec![1, 2, 3]));

        match KeyHashReporter::new(&config, &exporter).run() {
            Outcome::KeyHash { alias, hash, .. } => {
                assert_eq!(alias, "test");
                assert_eq!(hash.as_str(), "cDeAcZjCKn0rCAc3HXY3eahP388=");
            }
            o => panic!("unexpected outcome {o:?}"),
        }
        assert_eq!(exporter.calls.get(), 1);
    }

    #[test]
    fn idempotent() {
        let keystore = tempfile::NamedTempFile::new().unwrap();
        let config = keystore_config(&keystore);
        let exporter = FakeExporter::new(|| Ok(b"0\x82\x03\x1f0\x82\x02\x07".to_vec()));
        let reporter = KeyHashReporter::new(&config, &exporter);

        let hash = |o: Outcome| match o {
            Outcome::KeyHash { hash, .. } => hash,
            o => panic!("unexpected outcome {o:?}"),
        };
        assert_eq!(hash(reporter.run()), hash(reporter.run()));
        assert_eq!(exporter.calls.get(), 2);
    }

    #[test]
    fn keytool_failure_is_reported() {
        let keystore = tempfile::NamedTempFile::new().unwrap();
        let config = keystore_config(&keystore);
        let exporter = FakeExporter::new(|| {
            Err(Error::KeytoolFailed {
                code: Some(1),
                stderr: "keytool error: java.lang.Exception: Alias <test> does not exist\n"
                    .to_string(),
            })
        });

        let outcome = KeyHashReporter::new(&config, &exporter).run();
        let mut buf = vec![];
        outcome.write_human(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Error running keytool: keytool error: java.lang.Exception: Alias <test> does not exist\n\n"
        );
        assert_eq!(outcome.exit_code(), KeyHashExitCode::KeytoolFailed);
    }

    #[test]
    fn keytool_missing_is_reported() {
        let keystore = tempfile::NamedTempFile::new().unwrap();
        let config = keystore_config(&keystore);
        let exporter = FakeExporter::new(|| {
            Err(Error::KeytoolNotFound {
                program: "keytool".into(),
                source: std::io::ErrorKind::NotFound.into(),
            })
        });

        let outcome = KeyHashReporter::new(&config, &exporter).run();
        let mut buf = vec![];
        outcome.write_human(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "keytool not found. Make sure Java JDK is installed and in PATH\n"
        );
        assert!(!text.starts_with("Error: "));
        assert_eq!(outcome.exit_code(), KeyHashExitCode::KeytoolNotFound);
    }
}
