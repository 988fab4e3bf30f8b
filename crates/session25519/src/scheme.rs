/// Versioned derivation scheme.
///
/// Every constant of the derivation recipe hangs off this tag: the
/// password-hash mode, the stretched-material length, and whether a
/// signing keypair is produced. Schemes are permanent once issued:
/// both variants must keep reproducing historical bundles bit-for-bit,
/// and adding a future variant must not alter either one.
///
/// | Scheme    | Password hash             | Material | Output shape        |
/// |-----------|---------------------------|----------|---------------------|
/// | `Legacy`  | unkeyed BLAKE2s-256       | 32 bytes | encryption only     |
/// | `Current` | keyed BLAKE2b-512 ("v2")  | 64 bytes | encryption + signing|
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scheme {
    /// The original fixed single-hash derivation. 32 bytes of stretched
    /// material, encryption keypair only.
    Legacy,

    /// The domain-separated keyed-hash derivation. 64 bytes of stretched
    /// material, encryption and signing keypairs.
    #[default]
    Current,
}

impl Scheme {
    /// Length in bytes of the stretched key material for this scheme.
    pub fn material_len(&self) -> usize {
        match self {
            Self::Legacy => 32,
            Self::Current => 64,
        }
    }

    /// The literal domain-separation tag mixed into the password-hash
    /// key, or None for the unkeyed legacy mode.
    pub fn domain_tag(&self) -> Option<&'static [u8]> {
        match self {
            Self::Legacy => None,
            Self::Current => Some(b"v2"),
        }
    }

    /// True if this scheme derives a signing keypair.
    pub fn derives_signing(&self) -> bool {
        match self {
            Self::Legacy => false,
            Self::Current => true,
        }
    }
}
