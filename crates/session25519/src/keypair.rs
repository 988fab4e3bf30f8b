//! Deterministic keypair expansion from 32 byte seeds.
//!
//! The two primitives consume seed material differently, and that
//! difference is part of the compatibility contract: the encryption
//! seed IS the X25519 secret scalar (clamped inside the primitive),
//! while the signing seed feeds Ed25519 keypair generation (hashed and
//! expanded, not used as a scalar directly).

use crate::seed::SEED_BYTES;
use crate::*;

/// Derive the X25519 encryption keypair from a seed.
///
/// The bundle's secret key is the raw seed, matching NaCl's
/// `box.keyPair.fromSecretKey`: clamping happens at use, not at rest.
pub(crate) fn encryption_keypair(
    seed: &[u8; SEED_BYTES],
) -> SessionResult<EncryptionKeypair> {
    let secret = x25519_dalek::StaticSecret::from(*seed);
    let public = x25519_dalek::PublicKey::from(&secret);

    // a degenerate public key means a corrupted primitive, not bad
    // input; report it rather than retrying with different material
    if public.as_bytes() == &[0; 32] {
        return Err(Error::InvalidSeed(
            "x25519 produced an all-zero public key".into(),
        ));
    }

    Ok(EncryptionKeypair {
        public: public.to_bytes().into(),
        secret: (*seed).into(),
    })
}

/// Derive the Ed25519 signing keypair from a seed.
///
/// The secret key uses the 64 byte NaCl layout (seed ‖ public key),
/// matching `sign.keyPair.fromSeed`.
pub(crate) fn signing_keypair(
    seed: &[u8; SEED_BYTES],
) -> SessionResult<SigningKeypair> {
    let signing = ed25519_dalek::SigningKey::from_bytes(seed);
    let verifying = signing.verifying_key();

    if verifying.is_weak() {
        return Err(Error::InvalidSeed(
            "ed25519 produced a weak public key".into(),
        ));
    }

    Ok(SigningKeypair {
        public: verifying.to_bytes().into(),
        secret: signing.to_keypair_bytes().into(),
    })
}
