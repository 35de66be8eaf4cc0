// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026

use base64::prelude::*;
use openssl::sha::sha1;
use std::fmt::Display;
use utils::HexSlice;

/// Size of a SHA-1 digest in bytes
pub const SHA1_SIZE: usize = 20;

/// The key hash of a signing certificate.
///
/// base64 (standard alphabet, padded) of the SHA-1 digest over the DER encoded certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHash {
    sha1: [u8; SHA1_SIZE],
    encoded: String,
}

impl KeyHash {
    /// Computes the key hash of the certificate bytes `der`.
    ///
    /// `der` is hashed as is, it is neither parsed nor validated.
    pub fn from_cert(der: &[u8]) -> Self {
        let sha1 = sha1(der);
        Self {
            encoded: BASE64_STANDARD.encode(sha1),
            sha1,
        }
    }

    /// SHA-1 fingerprint of the certificate
    pub fn fingerprint(&self) -> HexSlice<'_> {
        HexSlice::from(&self.sha1)
    }

    /// The base64 encoded key hash
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl Display for KeyHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encoded)
    }
}
