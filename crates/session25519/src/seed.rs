//! Partitioning of stretched key material into keypair seeds.

use zeroize::Zeroizing;

/// Seed length consumed by both keypair primitives.
pub(crate) const SEED_BYTES: usize = 32;

/// The keypair seeds split out of the derived material.
///
/// The encryption seed is always bytes `0..32`: a prefix, independent
/// of scheme. The signing seed is bytes `32..64` and exists only for
/// 64 byte material. The offsets are load-bearing compatibility
/// constants; do not infer any guarantee from the prefix sharing beyond
/// the byte layout itself.
pub(crate) struct Seeds {
    pub encryption: Zeroizing<[u8; SEED_BYTES]>,
    pub signing: Option<Zeroizing<[u8; SEED_BYTES]>>,
}

impl Seeds {
    /// Split derived material into seeds.
    ///
    /// Material length is guaranteed 32 or 64 by the stretcher contract;
    /// anything else is a programming error, guarded explicitly rather
    /// than silently truncated.
    pub fn split(material: &[u8]) -> Self {
        match material.len() {
            32 => Self {
                encryption: copy_seed(material),
                signing: None,
            },
            64 => Self {
                encryption: copy_seed(&material[..SEED_BYTES]),
                signing: Some(copy_seed(&material[SEED_BYTES..])),
            },
            n => unreachable!("derived material must be 32 or 64 bytes, got {n}"),
        }
    }
}

fn copy_seed(b: &[u8]) -> Zeroizing<[u8; SEED_BYTES]> {
    let mut out = Zeroizing::new([0; SEED_BYTES]);
    out.copy_from_slice(b);
    out
}
