//! # Validator Errors
//!
//! Hard failures of proof verification. A well-formed signature that does
//! not verify is not an error: it is reported as `Ok(false)`.

use thiserror::Error;

/// Errors that abort proof verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidatorError {
    /// The proof could not be turned into a signature artifact.
    #[error("Proof pre-check failed: {0}")]
    PreCheck(String),

    /// The artifact carried no signatures.
    #[error("Proof carries an empty signature set")]
    EmptySignatureSet,

    /// The validator string is not PEM.
    #[error("Invalid PEM: {0}")]
    InvalidPem(String),

    /// The PEM block is not a parseable X.509 certificate.
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),

    /// The certificate key is not a supported ECDSA key.
    #[error("Unsupported signer key: expected an ECDSA P-256, P-384 or secp256k1 key")]
    UnsupportedKey,

    /// The signature is not a DER `SEQUENCE { INTEGER r, INTEGER s }`.
    #[error("Failed unmarshalling signature: {0}")]
    MalformedSignature(String),

    /// `r` or `s` is zero.
    #[error("Invalid signature, {0} must be larger than zero")]
    NonPositiveComponent(&'static str),
}
