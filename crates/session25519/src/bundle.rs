use crate::*;
use zeroize::{Zeroize, Zeroizing};

/// The caller-supplied credentials a bundle is derived from.
///
/// Ephemeral: lives for a single derivation call, is never mutated,
/// and is never stored. The secret is held in zeroizing memory and
/// wiped on drop.
#[derive(Clone)]
pub struct Identity {
    identifier: String,
    secret: Zeroizing<String>,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("identifier", &self.identifier)
            .finish()
    }
}

impl Identity {
    /// Construct from text credentials.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Construct from raw credential bytes, validating them as UTF-8.
    ///
    /// UTF-8 is the fixed text encoding of the reproducibility contract,
    /// so malformed input is rejected here, before any cryptographic
    /// work happens.
    pub fn from_utf8(identifier: Vec<u8>, secret: Vec<u8>) -> SessionResult<Self> {
        let identifier = String::from_utf8(identifier)
            .map_err(|e| Error::Encoding(e.utf8_error()))?;
        let secret = match String::from_utf8(secret) {
            Ok(s) => Zeroizing::new(s),
            Err(e) => {
                let err = Error::Encoding(e.utf8_error());
                // don't leave the rejected secret bytes behind
                e.into_bytes().zeroize();
                return Err(err);
            }
        };
        Ok(Self { identifier, secret })
    }

    /// The public identifier (email / username).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub(crate) fn identifier_bytes(&self) -> &[u8] {
        self.identifier.as_bytes()
    }

    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

/// A deterministic X25519 encryption keypair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EncryptionKeypair {
    /// X25519 public key (32 bytes).
    pub public: X25519PubKey,

    /// X25519 secret key: the raw 32 byte encryption seed, exactly as
    /// NaCl's `box.keyPair.fromSecretKey` stores it (unclamped).
    pub secret: SecretKeyData<32>,
}

/// A deterministic Ed25519 signing keypair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SigningKeypair {
    /// Ed25519 public key (32 bytes).
    pub public: Ed25519PubKey,

    /// Ed25519 secret key in the 64 byte NaCl layout: seed ‖ public key.
    pub secret: SecretKeyData<64>,
}

/// The complete derivation output, owned by the caller.
///
/// Holds no reference back to the seeds or the password. The signing
/// keypair is present only for [`Scheme::Current`] derivations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeyBundle {
    /// Encryption keypair, present under every scheme.
    pub encryption: EncryptionKeypair,

    /// Signing keypair, present only under [`Scheme::Current`].
    pub signing: Option<SigningKeypair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_accepts_valid_utf8_bytes() {
        let id = Identity::from_utf8(b"user@example.com".to_vec(), b"secret".to_vec()).unwrap();
        assert_eq!("user@example.com", id.identifier());
        assert_eq!(b"secret", id.secret_bytes());
    }

    #[test]
    fn identity_rejects_invalid_utf8_bytes() {
        let err = Identity::from_utf8(vec![0xff, 0xfe], b"secret".to_vec()).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        let err = Identity::from_utf8(b"ok".to_vec(), vec![0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn identity_debug_omits_secret() {
        let id = Identity::new("user@example.com", "hunter2");
        assert!(!format!("{id:?}").contains("hunter2"));
    }
}
