// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026

use std::{path::PathBuf, process::ExitCode};

use utils::impl_exitcodetrait;

/// Result type for this crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error cases for this crate
///
/// A missing keystore is not an error, see [`crate::report::Outcome::KeystoreNotFound`].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Error running keytool: {stderr}")]
    KeytoolFailed { code: Option<i32>, stderr: String },

    #[error("{} not found. Make sure Java JDK is installed and in PATH", .program.display())]
    KeytoolNotFound {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot run `{}`: {source}", .program.display())]
    KeytoolSpawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read configuration file `{}`: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration file `{}`: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl Error {
    /// The exit code the program terminates with after reporting this error.
    pub fn exit_code(&self) -> KeyHashExitCode {
        match self {
            Self::KeytoolFailed { .. } => KeyHashExitCode::KeytoolFailed,
            Self::KeytoolNotFound { .. } => KeyHashExitCode::KeytoolNotFound,
            Self::KeytoolSpawn { .. }
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. } => KeyHashExitCode::GenericError,
        }
    }
}

impl_exitcodetrait!(
    /// Exit status
    #[repr(u8)]
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub enum KeyHashExitCode {
        /// Key hash printed or keystore not found
        Success = 0,
        /// Unexpected error, see the printed message
        #[default]
        GenericError = 1,
        /// Invalid command line
        #[allow(dead_code)]
        UsageError = 2, // same exit code as used by `Clap` crate
        /// keytool exited with a non-zero status
        KeytoolFailed = 3,
        /// keytool not found
        KeytoolNotFound = 4,
        /// Logger could not be set up
        LoggerError = 5,
    }
);

impl From<KeyHashExitCode> for ExitCode {
    fn from(value: KeyHashExitCode) -> Self {
        Self::from(value as u8)
    }
}
