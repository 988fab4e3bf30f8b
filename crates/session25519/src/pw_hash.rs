//! Password hashing stage, the first step of the derivation pipeline.
//!
//! `Legacy` hashes the secret with plain BLAKE2s-256. `Current` keys a
//! BLAKE2b-512 of the secret with a hash of the identifier and the
//! scheme tag, so precomputation against the hash stage cannot be
//! shared across identifiers or schemes.

use crate::*;
use zeroize::Zeroizing;

/// BLAKE2b key length for the keyed (current) mode.
const KEYED_HASH_KEYBYTES: usize = 32;

/// Hash the secret into fixed-length digest material for the stretcher.
///
/// Output is exactly 32 bytes for [`Scheme::Legacy`] and 64 bytes for
/// [`Scheme::Current`]; the digest is sensitive and returned in
/// zeroizing memory.
pub(crate) fn hash_secret(
    secret: &[u8],
    identifier: &[u8],
    scheme: Scheme,
) -> SessionResult<Zeroizing<Vec<u8>>> {
    match scheme.domain_tag() {
        None => {
            use blake2::{Blake2s256, Digest};

            let digest = Blake2s256::digest(secret);
            Ok(Zeroizing::new(digest.to_vec()))
        }
        Some(tag) => {
            let key = derive_hash_key(identifier, tag)?;

            use blake2::digest::Mac;

            let mut mac = blake2::Blake2bMac512::new_from_slice(&*key)
                .map_err(Error::config)?;
            mac.update(secret);
            let digest = mac.finalize().into_bytes();
            Ok(Zeroizing::new(digest.to_vec()))
        }
    }
}

/// Hash key for the keyed mode: BLAKE2b-256 of identifier ‖ tag.
fn derive_hash_key(
    identifier: &[u8],
    tag: &[u8],
) -> SessionResult<Zeroizing<[u8; KEYED_HASH_KEYBYTES]>> {
    use blake2::digest::{Update, VariableOutput};

    let mut hasher =
        blake2::Blake2bVar::new(KEYED_HASH_KEYBYTES).map_err(Error::config)?;
    hasher.update(identifier);
    hasher.update(tag);

    let mut key = Zeroizing::new([0; KEYED_HASH_KEYBYTES]);
    hasher
        .finalize_variable(key.as_mut_slice())
        .map_err(Error::config)?;
    Ok(key)
}
