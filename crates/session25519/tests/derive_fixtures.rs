//! Canonical reference-vector tests, run at full (2^17) scrypt cost.
//!
//! These vectors are permanent. They pin the exact byte layout of both
//! derivation schemes; a failure here means already-issued identities
//! would no longer reproduce.

use pretty_assertions::assert_eq;
use session25519::*;

const FIXTURES: &str = include_str!("fixtures/derive_fixtures.json");

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Vector {
    #[allow(dead_code)]
    comment: String,
    identifier: String,
    secret: String,
    scheme: Scheme,
    encryption_public_key: String,
    encryption_secret_key: String,
    signing_public_key: Option<String>,
    signing_secret_key: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct Suite {
    vectors: Vec<Vector>,
}

#[tokio::test(flavor = "multi_thread")]
async fn canonical_vectors_reproduce_bit_for_bit() {
    let suite: Suite = serde_json::from_str(FIXTURES).unwrap();
    let deriver = Deriver::new();

    for v in suite.vectors {
        let identity = Identity::new(v.identifier.as_str(), v.secret.as_str());
        let bundle = deriver.derive(&identity, v.scheme).await.unwrap();

        assert_eq!(v.encryption_public_key, bundle.encryption.public.to_string());
        assert_eq!(v.encryption_secret_key, bundle.encryption.secret.to_base64());

        match (&v.signing_public_key, &bundle.signing) {
            (Some(expect_pub), Some(signing)) => {
                assert_eq!(expect_pub, &signing.public.to_string());
                assert_eq!(
                    v.signing_secret_key.as_ref().unwrap(),
                    &signing.secret.to_base64(),
                );
            }
            (None, None) => (),
            (expect, got) => {
                panic!("signing shape mismatch: expected {expect:?}, got {got:?}")
            }
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn convenience_entry_matches_current_vector() {
    let suite: Suite = serde_json::from_str(FIXTURES).unwrap();
    let current = suite
        .vectors
        .iter()
        .find(|v| v.scheme == Scheme::Current)
        .unwrap();

    let bundle = derive_key_bundle(&current.identifier, &current.secret)
        .await
        .unwrap();
    assert_eq!(
        current.encryption_public_key,
        bundle.encryption.public.to_string(),
    );
}
