#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(warnings)]
//! Deterministic X25519 / Ed25519 key bundle derivation from an
//! identifier (email / username) and a passphrase.
//!
//! The same `(identifier, secret, scheme)` inputs always reproduce the
//! identical key bundle. No random seed is ever used, and no secret
//! material is ever persisted. The pipeline is:
//!
//! password hash → memory-hard stretch (scrypt) → seed split → keypair
//! expansion.
//!
//! Two derivation [`Scheme`]s exist and both stay reproducible forever;
//! breaking either would break already-issued identities.
//!
//! ```rust
//! # #[tokio::main(flavor = "multi_thread")]
//! # async fn main() {
//! // low cost for doc-test speed; real callers use the defaults
//! let deriver = session25519::Deriver::with_params(session25519::KdfParams {
//!     cost_log2: 8,
//!     block_size: 8,
//! })
//! .unwrap();
//!
//! let identity = session25519::Identity::new("user@example.com", "secret");
//! let bundle = deriver
//!     .derive(&identity, session25519::Scheme::Current)
//!     .await
//!     .unwrap();
//!
//! println!("encryption public key: {}", bundle.encryption.public);
//! assert!(bundle.signing.is_some());
//! # }
//! ```

mod error;
pub use error::*;

mod key_data;
pub use key_data::*;

mod scheme;
pub use scheme::*;

mod bundle;
pub use bundle::*;

mod pw_hash;

mod stretch;
pub use stretch::{KdfParams, BLOCK_SIZE, COST_LOG2};

mod seed;

mod keypair;

mod deriver;
pub use deriver::*;
