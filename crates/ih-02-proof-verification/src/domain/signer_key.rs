//! # Signer Keys
//!
//! ECDSA public keys extracted from PEM X.509 signer certificates.
//!
//! Supported curves:
//! - P-256 (the curve Fabric-style networks issue signer certificates on)
//! - P-384
//! - secp256k1
//!
//! Verification hashes nothing itself: callers pass a SHA-256 digest.

use super::errors::ValidatorError;
use super::signature::EcdsaSignatureComponents;
use der::{DecodePem, Encode};
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::pkcs8::DecodePublicKey;
use x509_cert::Certificate;

/// Parsed signer public key.
#[derive(Clone, Debug)]
pub enum SignerKey {
    /// NIST P-256.
    P256(p256::ecdsa::VerifyingKey),
    /// NIST P-384.
    P384(p384::ecdsa::VerifyingKey),
    /// secp256k1.
    Secp256k1(k256::ecdsa::VerifyingKey),
}

impl SignerKey {
    /// Parse a PEM-encoded X.509 certificate and take its subject key.
    pub fn from_certificate_pem(pem: &str) -> Result<Self, ValidatorError> {
        let cert = Certificate::from_pem(pem.as_bytes()).map_err(|e| match e.kind() {
            der::ErrorKind::Pem(_) => ValidatorError::InvalidPem(e.to_string()),
            _ => ValidatorError::InvalidCertificate(e.to_string()),
        })?;

        let spki = cert
            .tbs_certificate
            .subject_public_key_info
            .to_der()
            .map_err(|e| ValidatorError::InvalidCertificate(e.to_string()))?;

        Self::from_public_key_der(&spki)
    }

    /// Parse a DER `SubjectPublicKeyInfo`.
    pub fn from_public_key_der(spki: &[u8]) -> Result<Self, ValidatorError> {
        if let Ok(key) = p256::PublicKey::from_public_key_der(spki) {
            return Ok(Self::P256(key.into()));
        }
        if let Ok(key) = p384::PublicKey::from_public_key_der(spki) {
            return Ok(Self::P384(key.into()));
        }
        if let Ok(key) = k256::PublicKey::from_public_key_der(spki) {
            return Ok(Self::Secp256k1(key.into()));
        }
        Err(ValidatorError::UnsupportedKey)
    }

    /// Curve name, for logs.
    pub fn curve(&self) -> &'static str {
        match self {
            Self::P256(_) => "P-256",
            Self::P384(_) => "P-384",
            Self::Secp256k1(_) => "secp256k1",
        }
    }

    /// Scalar width of the curve in bytes.
    pub fn scalar_size(&self) -> usize {
        match self {
            Self::P256(_) | Self::Secp256k1(_) => 32,
            Self::P384(_) => 48,
        }
    }

    /// Verify `sig` over a SHA-256 `digest`.
    ///
    /// Components outside `[1, n-1]` verify as false. On P-384 the digest is
    /// shorter than the scalar and is taken as a left-padded integer.
    pub fn verify_prehash(&self, digest: &[u8; 32], sig: &EcdsaSignatureComponents) -> bool {
        let Some(bytes) = sig.to_fixed_bytes(self.scalar_size()) else {
            return false;
        };

        match self {
            Self::P256(key) => match p256::ecdsa::Signature::from_slice(&bytes) {
                Ok(signature) => key.verify_prehash(digest, &signature).is_ok(),
                Err(_) => false,
            },
            Self::P384(key) => match p384::ecdsa::Signature::from_slice(&bytes) {
                Ok(signature) => key.verify_prehash(digest, &signature).is_ok(),
                Err(_) => false,
            },
            Self::Secp256k1(key) => match k256::ecdsa::Signature::from_slice(&bytes) {
                Ok(signature) => {
                    // k256 only verifies low-S; either form is accepted here
                    let signature = signature.normalize_s().unwrap_or(signature);
                    key.verify_prehash(digest, &signature).is_ok()
                }
                Err(_) => false,
            },
        }
    }
}
