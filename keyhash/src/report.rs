// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026

use serde::{Serialize, Serializer};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use utils::HexSlice;

use crate::digest::KeyHash;
use crate::error::{Error, KeyHashExitCode};

const INSTRUCTIONS: &str = "Add this key hash to your Facebook app settings:
1. Go to https://developers.facebook.com/
2. Select your app
3. Go to Settings > Basic
4. Add the key hash to Android settings";

/// Result of one key hash run
#[derive(Debug)]
pub enum Outcome {
    KeyHash {
        keystore: PathBuf,
        alias: String,
        hash: KeyHash,
    },
    KeystoreNotFound {
        keystore: PathBuf,
    },
    Failed(Error),
}

// paths are not necessarily UTF-8, the report must still be valid JSON
fn lossy_path<S: Serializer>(path: &&Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&path.display())
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonReport<'a> {
    KeyHash {
        #[serde(serialize_with = "lossy_path")]
        keystore: &'a Path,
        alias: &'a str,
        key_hash: &'a str,
        sha1: HexSlice<'a>,
    },
    KeystoreNotFound {
        #[serde(serialize_with = "lossy_path")]
        keystore: &'a Path,
    },
    KeytoolFailed {
        exit_code: Option<i32>,
        message: &'a str,
    },
    KeytoolNotFound {
        #[serde(serialize_with = "lossy_path")]
        keytool: &'a Path,
        message: String,
    },
    Error {
        message: String,
    },
}

impl<'a> From<&'a Outcome> for JsonReport<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        match outcome {
            Outcome::KeyHash {
                keystore,
                alias,
                hash,
            } => Self::KeyHash {
                keystore,
                alias,
                key_hash: hash.as_str(),
                sha1: hash.fingerprint(),
            },
            Outcome::KeystoreNotFound { keystore } => Self::KeystoreNotFound { keystore },
            Outcome::Failed(e @ Error::KeytoolNotFound { program, .. }) => Self::KeytoolNotFound {
                keytool: program,
                message: e.to_string(),
            },
            Outcome::Failed(Error::KeytoolFailed { code, stderr }) => Self::KeytoolFailed {
                exit_code: *code,
                message: stderr,
            },
            Outcome::Failed(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }
}

impl Outcome {
    /// Exit code of the program for this outcome.
    ///
    /// A missing keystore is informational and exits successfully.
    pub fn exit_code(&self) -> KeyHashExitCode {
        match self {
            Self::KeyHash { .. } | Self::KeystoreNotFound { .. } => KeyHashExitCode::Success,
            Self::Failed(e) => e.exit_code(),
        }
    }

    /// Writes the report for humans, including the instructions for the Facebook developer
    /// console on success.
    pub fn write_human<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Self::KeyHash { hash, .. } => {
                writeln!(w, "Facebook Key Hash: {hash}")?;
                writeln!(w)?;
                writeln!(w, "{INSTRUCTIONS}")
            }
            Self::KeystoreNotFound { keystore } => {
                writeln!(w, "Keystore not found at: {}", keystore.display())
            }
            Self::Failed(e @ (Error::KeytoolFailed { .. } | Error::KeytoolNotFound { .. })) => {
                writeln!(w, "{e}")
            }
            Self::Failed(e) => writeln!(w, "Error: {e}"),
        }
    }

    /// Writes the report as a single line JSON object.
    ///
    /// Nothing is written if the report cannot be serialized.
    pub fn write_json<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let mut json = serde_json::to_vec(&JsonReport::from(self))?;
        json.push(b'\n');
        w.write_all(&json)
    }
}
