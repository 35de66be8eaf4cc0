// SPDX-License-Identifier: MIT
//! Utils for the keyhash tools written in rust.
//! Not intended to be used outside of this workspace.
//!
//! Copyright IBM Corp. 2026

mod cli;
mod exit_code;
mod hexslice;
mod log;

pub use crate::cli::{print_cli_error, VerbosityOptions};
pub use crate::exit_code::{docstring, ExitCodeDoc, ExitCodeTrait, ExitCodeVariantDoc};
pub use crate::hexslice::HexSlice;
pub use crate::log::StderrLogger;

/// Get the release string
///
/// Provides the release string of the tool.
/// Uses the environment variable `KEYHASH_RELEASE` if present at compile time.
/// For debug builds this value defaults to `DEBUG BUILD`,
/// for release builds to the crate version of the calling binary.
/// Should only be used by binary targets!!
///
/// Collapses to a compile time constant, that is likely to be inlined
/// by the compiler in release builds.
#[macro_export]
macro_rules! release_string {
    () => {{
     #[cfg(debug_assertions)]
    match option_env!("KEYHASH_RELEASE") {
        Some(ver) => ver,
        None => "DEBUG BUILD",
    }
    #[cfg(not(debug_assertions))]
    match option_env!("KEYHASH_RELEASE") {
        Some(ver) => ver,
        None => env!("CARGO_PKG_VERSION"),
    }
    }};
}

/// Print the version information of the calling binary.
///
/// * `$year` - first year of the copyright line
/// * `$verbosity` - a [`::log::LevelFilter`]; above `Warn` the crate version is printed as well
#[macro_export]
macro_rules! print_version {
    ($year: expr, $verbosity: expr) => {{
        println!(
            "{} version {}\nCopyright IBM Corp. {}",
            env!("CARGO_PKG_NAME"),
            $crate::release_string!(),
            $year
        );
        if $verbosity > ::log::LevelFilter::Warn {
            println!(
                "\n{}-crate {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            );
        }
    }};
}
