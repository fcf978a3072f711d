//! Credential storage policy.
//!
//! The account service never compares secrets itself; it asks a
//! `CredentialPolicy` to seal a secret at registration and to verify a
//! supplied secret at sign-in. Swapping in a hashing policy needs no change
//! anywhere else.

/// Turns secrets into stored credentials and checks them later.
pub trait CredentialPolicy {
    /// Produces the value persisted in `IdentityRecord::credential`.
    fn seal(&self, secret: &str) -> String;
    /// Returns whether `supplied` matches the persisted `stored` value.
    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Stores secrets verbatim and compares by equality.
///
/// Compatible with records written before credential policies existed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentials;

impl CredentialPolicy for PlaintextCredentials {
    fn seal(&self, secret: &str) -> String {
        secret.to_string()
    }

    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored == supplied
    }
}
