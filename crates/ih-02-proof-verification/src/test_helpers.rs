//! Certificate and signing fixtures for tests.
//!
//! Enabled in this crate's tests and, for other crates, through the
//! `test-helpers` feature.

use crate::adapters::envelope::SignedEnvelope;
use crate::domain::entities::SignedData;
use p256::ecdsa::signature::hazmat::PrehashSigner;
use p256::pkcs8::DecodePrivateKey;
use rcgen::{CertificateParams, KeyPair, SignatureAlgorithm};
use sha2::{Digest, Sha256};

enum TestKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
}

/// A self-signed ECDSA signer.
pub struct TestSigner {
    cert_pem: String,
    key: TestKey,
}

impl TestSigner {
    /// Fresh P-256 key pair and self-signed certificate.
    pub fn generate() -> Self {
        let (cert_pem, pkcs8) = self_signed(&rcgen::PKCS_ECDSA_P256_SHA256);
        let key = p256::ecdsa::SigningKey::from_pkcs8_der(&pkcs8).expect("p256 pkcs8 key");
        Self {
            cert_pem,
            key: TestKey::P256(key),
        }
    }

    /// Fresh P-384 key pair and self-signed certificate.
    pub fn generate_p384() -> Self {
        let (cert_pem, pkcs8) = self_signed(&rcgen::PKCS_ECDSA_P384_SHA384);
        let key = p384::ecdsa::SigningKey::from_pkcs8_der(&pkcs8).expect("p384 pkcs8 key");
        Self {
            cert_pem,
            key: TestKey::P384(key),
        }
    }

    /// PEM certificate, as registered in a rule's validator field.
    pub fn cert_pem(&self) -> &str {
        &self.cert_pem
    }

    /// DER ECDSA signature over SHA-256(`data`), whatever the curve.
    pub fn sign(&self, data: &[u8]) -> Vec<u8> {
        let digest = Sha256::digest(data);
        match &self.key {
            TestKey::P256(key) => {
                let sig: p256::ecdsa::Signature = key.sign_prehash(&digest).expect("p256 signing");
                sig.to_der().as_bytes().to_vec()
            }
            TestKey::P384(key) => {
                let sig: p384::ecdsa::Signature = key.sign_prehash(&digest).expect("p384 signing");
                sig.to_der().as_bytes().to_vec()
            }
        }
    }

    /// Proof envelope for `payload`, signing `signed_part`.
    pub fn signed_envelope(&self, context: &str, payload: &[u8], signed_part: &[u8]) -> Vec<u8> {
        let envelope = SignedEnvelope {
            context: context.to_string(),
            payload: payload.to_vec(),
            signatures: vec![SignedData::new(signed_part, self.sign(signed_part))],
        };
        serde_json::to_vec(&envelope).expect("envelope serialization")
    }
}

/// Self-signed certificate PEM and PKCS#8 DER private key.
fn self_signed(alg: &'static SignatureAlgorithm) -> (String, Vec<u8>) {
    let key_pair = KeyPair::generate_for(alg).expect("key generation failed");
    let cert = CertificateParams::new(vec!["relayer.interchain.local".to_string()])
        .expect("certificate params")
        .self_signed(&key_pair)
        .expect("self-signing failed");
    (cert.pem(), key_pair.serialize_der())
}
