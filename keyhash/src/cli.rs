// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026

use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;
use utils::VerbosityOptions;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-focused, non-parsable output format
    #[default]
    Human,

    /// Use JSON format
    Json,
}

/// compute the Facebook key hash of an Android signing certificate
///
/// Exports the certificate of a keystore entry with 'keytool -exportcert', computes the SHA-1
/// digest of the DER encoded certificate and prints it base64 encoded. This is the key hash
/// Facebook login expects in the Android settings of an app.
///
/// Without options the entry 'test' of 'android/app/login.jks' is used.
#[derive(Parser, Debug)]
#[command(name = "keyhash")]
pub struct CliOptions {
    /// Verbosity of the log output on stderr
    #[clap(flatten)]
    pub verbosity: VerbosityOptions,

    /// Print version information and exit
    #[arg(long)]
    pub version: bool,

    /// Read the keystore settings from FILE.
    ///
    /// YAML file with the optional keys 'keystore', 'alias', 'store-password', 'key-password',
    /// and 'keytool'. Command line options take precedence over the file.
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Use FILE as keystore.
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub keystore: Option<PathBuf>,

    /// Export the certificate of the keystore entry NAME.
    #[arg(short, long, value_name = "NAME")]
    pub alias: Option<String>,

    /// Password of the keystore.
    #[arg(long, value_name = "PASSWORD")]
    pub storepass: Option<String>,

    /// Password of the key.
    ///
    /// Defaults to the keystore password if only that one is given on the command line.
    #[arg(long, value_name = "PASSWORD")]
    pub keypass: Option<String>,

    /// Use PROGRAM instead of 'keytool' from PATH.
    #[arg(long, value_name = "PROGRAM", value_hint = ValueHint::CommandName)]
    pub keytool: Option<PathBuf>,

    /// Output format of the report.
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,
}
