//! Memory-hard key stretching via scrypt.
//!
//! Deliberately expensive in cpu and memory. The cost parameters exist
//! to slow brute-force guessing of low-entropy passwords. The salt is
//! the raw identifier bytes, never a random value: determinism requires
//! the same identifier to always produce the same salt.

use crate::*;
use zeroize::Zeroizing;

/// Canonical scrypt cost exponent (N = 2^17).
pub const COST_LOG2: u8 = 17;

/// Canonical scrypt block size (r).
pub const BLOCK_SIZE: u32 = 8;

// parallelism is fixed at 1 for every scheme
const PARALLELISM: u32 = 1;

/// Tunable scrypt cost parameters.
///
/// The defaults are the canonical compatibility values; every bundle
/// ever issued was stretched at N = 2^17, r = 8. Anything else is for
/// testing; a bundle derived at a different cost is a different bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Cost exponent; scrypt N is 2^cost_log2.
    pub cost_log2: u8,

    /// scrypt block size (r).
    pub block_size: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            cost_log2: COST_LOG2,
            block_size: BLOCK_SIZE,
        }
    }
}

impl KdfParams {
    /// Check this parameter combination against the scrypt domain,
    /// without doing any stretching work.
    ///
    /// Invalid combinations are a fatal [`Error::Configuration`], raised
    /// before any hashing begins.
    pub fn validate(&self) -> SessionResult<()> {
        // both scheme output lengths share the same parameter domain,
        // checking one is enough
        self.to_scrypt(Scheme::Current.material_len()).map(|_| ())
    }

    fn to_scrypt(&self, out_len: usize) -> SessionResult<scrypt::Params> {
        scrypt::Params::new(self.cost_log2, self.block_size, PARALLELISM, out_len)
            .map_err(Error::config)
    }
}

/// Stretch the hashed secret into derived key material.
///
/// Blocking, and takes hundreds of milliseconds at canonical cost. Callers
/// run it on the blocking pool (see the deriver).
pub(crate) fn stretch(
    hashed_secret: &[u8],
    salt: &[u8],
    params: &KdfParams,
    out_len: usize,
) -> SessionResult<Zeroizing<Vec<u8>>> {
    let scrypt_params = params.to_scrypt(out_len)?;
    let mut material = Zeroizing::new(vec![0; out_len]);
    scrypt::scrypt(hashed_secret, salt, &scrypt_params, &mut material)
        .map_err(Error::config)?;
    Ok(material)
}
