//! Helper types for base64 text transport of key material.
//!
//! The text form of every key field is standard base64 (standard
//! alphabet, with padding) to stay bit-compatible with previously
//! issued bundles. Never url-safe.

use crate::SessionResult;
use base64::Engine;
use std::sync::Arc;
use zeroize::Zeroizing;

fn to_base64<B: AsRef<[u8]>>(b: B) -> String {
    base64::prelude::BASE64_STANDARD.encode(b.as_ref())
}

fn from_base64<S: AsRef<str>>(s: S) -> SessionResult<Vec<u8>> {
    base64::prelude::BASE64_STANDARD
        .decode(s.as_ref())
        .map_err(crate::Error::config)
}

/// Wrapper newtype for public (non-secret) sized key data.
///
/// Renders as standard padded base64 via `Display` / serde, parses back
/// via `FromStr` / serde.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyData<const N: usize>(pub Arc<[u8; N]>);

impl<const N: usize> std::fmt::Debug for KeyData<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = to_base64(*self.0);
        write!(f, "KeyData<{N}>({s})")
    }
}

impl<const N: usize> std::fmt::Display for KeyData<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_base64(*self.0))
    }
}

impl<const N: usize> std::str::FromStr for KeyData<N> {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tmp = from_base64(s)?;
        if tmp.len() != N {
            return Err(crate::Error::config("invalid key data length"));
        }
        let mut out = [0; N];
        out.copy_from_slice(&tmp);
        Ok(Self(Arc::new(out)))
    }
}

impl<const N: usize> KeyData<N> {
    /// Get a clone of our inner Arc<[u8; N]>.
    pub fn cloned_inner(&self) -> Arc<[u8; N]> {
        self.0.clone()
    }
}

impl<const N: usize> From<[u8; N]> for KeyData<N> {
    fn from(b: [u8; N]) -> Self {
        Self(Arc::new(b))
    }
}

impl<const N: usize> std::ops::Deref for KeyData<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> serde::Serialize for KeyData<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&to_base64(*self.0))
    }
}

impl<'de, const N: usize> serde::Deserialize<'de> for KeyData<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tmp: String = serde::Deserialize::deserialize(deserializer)?;
        tmp.parse().map_err(serde::de::Error::custom)
    }
}

/// X25519 encryption public key derived from a seed.
pub type X25519PubKey = KeyData<32>;

/// Ed25519 signature public key derived from a seed.
pub type Ed25519PubKey = KeyData<32>;

/// Sized secret key data, zeroized on drop.
///
/// `Debug` is redacted; the bytes only leave through [`as_bytes`] /
/// [`to_base64`], both explicit calls at the caller's discretion.
///
/// [`as_bytes`]: SecretKeyData::as_bytes
/// [`to_base64`]: SecretKeyData::to_base64
#[derive(Clone)]
pub struct SecretKeyData<const N: usize>(Zeroizing<[u8; N]>);

impl<const N: usize> PartialEq for SecretKeyData<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice() == other.0.as_slice()
    }
}

impl<const N: usize> Eq for SecretKeyData<N> {}

impl<const N: usize> std::fmt::Debug for SecretKeyData<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKeyData<{N}>(<secret>)")
    }
}

impl<const N: usize> SecretKeyData<N> {
    /// Access the raw secret key bytes.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Standard padded base64 rendering of the secret key.
    pub fn to_base64(&self) -> String {
        to_base64(*self.0)
    }
}

impl<const N: usize> From<[u8; N]> for SecretKeyData<N> {
    fn from(b: [u8; N]) -> Self {
        Self(Zeroizing::new(b))
    }
}

impl<const N: usize> serde::Serialize for SecretKeyData<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de, const N: usize> serde::Deserialize<'de> for SecretKeyData<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tmp: String = serde::Deserialize::deserialize(deserializer)?;
        let tmp = from_base64(tmp).map_err(serde::de::Error::custom)?;
        if tmp.len() != N {
            return Err(serde::de::Error::custom("invalid key data length"));
        }
        let mut out = Zeroizing::new([0; N]);
        out.copy_from_slice(&tmp);
        Ok(Self(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_data_base64_round_trip() {
        let kd = KeyData::<4>::from([0xde, 0xad, 0xbe, 0xef]);
        // standard alphabet, padded
        assert_eq!("3q2+7w==", kd.to_string());
        let back: KeyData<4> = "3q2+7w==".parse().unwrap();
        assert_eq!(kd, back);
    }

    #[test]
    fn key_data_rejects_wrong_length() {
        assert!("3q2+7w==".parse::<KeyData<32>>().is_err());
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let sk = SecretKeyData::<4>::from([1, 2, 3, 4]);
        let dbg = format!("{sk:?}");
        assert!(!dbg.contains("AQIDBA"));
        assert!(dbg.contains("<secret>"));
    }
}
