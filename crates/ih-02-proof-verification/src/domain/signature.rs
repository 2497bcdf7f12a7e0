//! # ECDSA Signature Decoding
//!
//! Decodes the ASN.1 `SEQUENCE { INTEGER r, INTEGER s }` form and rejects
//! components that are not strictly positive, before any curve arithmetic.

use super::errors::ValidatorError;
use der::asn1::UintRef;
use der::{Decode, Sequence};

/// DER layout of an ECDSA signature. Negative integers fail to decode.
#[derive(Sequence)]
struct EcdsaSigValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

/// Decoded `(r, s)` as big-endian magnitudes without leading zeros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaSignatureComponents {
    r: Vec<u8>,
    s: Vec<u8>,
}

impl EcdsaSignatureComponents {
    pub fn r(&self) -> &[u8] {
        &self.r
    }

    pub fn s(&self) -> &[u8] {
        &self.s
    }

    /// `r || s`, each left-padded to `width` bytes, or `None` if either is
    /// wider than `width`.
    pub fn to_fixed_bytes(&self, width: usize) -> Option<Vec<u8>> {
        if self.r.len() > width || self.s.len() > width {
            return None;
        }
        let mut out = vec![0u8; width * 2];
        out[width - self.r.len()..width].copy_from_slice(&self.r);
        out[width * 2 - self.s.len()..].copy_from_slice(&self.s);
        Some(out)
    }
}

/// Strip leading zeros; `None` for a zero value.
fn positive_magnitude(bytes: &[u8]) -> Option<&[u8]> {
    let start = bytes.iter().position(|b| *b != 0)?;
    Some(&bytes[start..])
}

/// Decode a DER ECDSA signature into its components.
///
/// Bytes after the outer sequence are rejected.
pub fn unmarshal_ecdsa_signature(raw: &[u8]) -> Result<EcdsaSignatureComponents, ValidatorError> {
    let sig =
        EcdsaSigValue::from_der(raw).map_err(|e| ValidatorError::MalformedSignature(e.to_string()))?;

    let r = positive_magnitude(sig.r.as_bytes()).ok_or(ValidatorError::NonPositiveComponent("r"))?;
    let s = positive_magnitude(sig.s.as_bytes()).ok_or(ValidatorError::NonPositiveComponent("s"))?;

    Ok(EcdsaSignatureComponents {
        r: r.to_vec(),
        s: s.to_vec(),
    })
}
