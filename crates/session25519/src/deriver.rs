//! The derivation service: composes password hashing, stretching, seed
//! splitting, and keypair expansion into one pipeline.
//!
//! The service is an explicitly constructed instance with no
//! process-wide state. Each call is independent; concurrent
//! derivations share nothing, and a failed call is never retried
//! internally (identical inputs would fail identically).

use crate::seed::Seeds;
use crate::{keypair, pw_hash, stretch};
use crate::*;

/// Stateless deterministic derivation service.
///
/// Cheap to construct and to clone; holds only the validated KDF cost
/// parameters.
#[derive(Debug, Clone)]
pub struct Deriver {
    params: KdfParams,
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Deriver {
    /// Service with the canonical compatibility parameters.
    pub fn new() -> Self {
        Self {
            params: KdfParams::default(),
        }
    }

    /// Service with explicit KDF parameters, validated up front.
    ///
    /// Anything outside the scrypt domain fails here with
    /// [`Error::Configuration`], before any derivation is attempted.
    pub fn with_params(params: KdfParams) -> SessionResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Derive the key bundle for an identity under the given scheme.
    ///
    /// The expensive stretch runs on the blocking pool so the calling
    /// async context is never starved. Returns either a complete, valid
    /// bundle or the error of the stage that failed, never a partial
    /// bundle.
    pub async fn derive(
        &self,
        identity: &Identity,
        scheme: Scheme,
    ) -> SessionResult<KeyBundle> {
        // parameter domain check happens before any hashing
        self.params.validate()?;

        tracing::debug!(?scheme, "deriving key bundle");

        let params = self.params;
        let identifier = identity.identifier_bytes().to_vec();
        let secret = zeroize::Zeroizing::new(identity.secret_bytes().to_vec());

        let material = tokio::task::spawn_blocking(move || {
            let digest = pw_hash::hash_secret(&secret, &identifier, scheme)?;
            stretch::stretch(&digest, &identifier, &params, scheme.material_len())
        })
        .await
        .map_err(join_err)??;

        let seeds = Seeds::split(&material);
        drop(material);

        let encryption = keypair::encryption_keypair(&seeds.encryption)?;
        let signing = match &seeds.signing {
            Some(seed) => Some(keypair::signing_keypair(seed)?),
            None => None,
        };

        tracing::trace!(?scheme, "key bundle derived");

        Ok(KeyBundle {
            encryption,
            signing,
        })
    }

    /// Spawn a derivation as a cancellable background task.
    ///
    /// The returned [`DeriveTask`] can be awaited with
    /// [`DeriveTask::finish`] or abandoned with [`DeriveTask::cancel`]
    /// (or by dropping it). Abandoned work is discarded; no partial
    /// bundle is ever observable.
    pub fn spawn(&self, identity: &Identity, scheme: Scheme) -> DeriveTask {
        let deriver = self.clone();
        let identity = identity.clone();
        let task = tokio::task::spawn(async move {
            deriver.derive(&identity, scheme).await
        });
        DeriveTask { task }
    }
}

fn join_err(e: tokio::task::JoinError) -> Error {
    match e.try_into_panic() {
        Ok(panic) => std::panic::resume_unwind(panic),
        Err(_) => Error::Cancelled,
    }
}

/// Handle to a pending background derivation.
///
/// Dropping the handle cancels the derivation.
#[derive(Debug)]
pub struct DeriveTask {
    task: tokio::task::JoinHandle<SessionResult<KeyBundle>>,
}

impl DeriveTask {
    /// Await completion of the derivation.
    pub async fn finish(mut self) -> SessionResult<KeyBundle> {
        match (&mut self.task).await {
            Ok(res) => res,
            Err(e) => Err(join_err(e)),
        }
    }

    /// Abandon the derivation. Partially completed stretcher work is
    /// discarded with no observable side effect.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for DeriveTask {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Derive the key bundle for `(identifier, secret)` under the default
/// [`Scheme::Current`] with canonical cost parameters.
///
/// The single-call form of the public contract: same inputs, same
/// bundle, forever.
pub async fn derive_key_bundle(
    identifier: &str,
    secret: &str,
) -> SessionResult<KeyBundle> {
    Deriver::new()
        .derive(&Identity::new(identifier, secret), Scheme::default())
        .await
}
