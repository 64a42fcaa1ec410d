use chrono::Utc;
use tracing::debug;

use crate::claims::{CredentialVerifier, ExternalClaims};
use crate::error::AuthError;
use crate::principal::{Principal, PrincipalDraft};
use crate::store::{PrincipalStore, StoreError};

/// Maps verified claims to an internal principal, provisioning on first sight.
///
/// Resolution is get-or-create:
/// 1. Look up by subject id; a hit is returned unchanged (lookups never write,
///    so claim contents cannot silently change a stored role or brand).
/// 2. On a miss, insert a `Client` draft built from the claims.
/// 3. An insert conflict means another request provisioned the same subject
///    concurrently; re-fetch and return the winner's record.
///
/// Uniqueness on subject id is the store's constraint, not an in-process
/// lock: the resolver may run across independent process instances.
pub struct PrincipalResolver<S> {
    store: S,
}

impl<S> PrincipalResolver<S>
where
    S: PrincipalStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn resolve(&self, claims: &ExternalClaims) -> Result<Principal, AuthError> {
        if let Some(existing) = self.store.find_by_subject_id(&claims.subject_id)? {
            return Ok(existing);
        }

        let draft = PrincipalDraft::from_claims(claims, Utc::now());
        match self.store.insert(draft) {
            Ok(created) => {
                debug!(subject = %created.subject_id, principal = %created.id, "auto-provisioned principal");
                Ok(created)
            }
            Err(StoreError::Conflict(subject_id)) => {
                // Lost the first-sight race; the winner's record is authoritative.
                self.store
                    .find_by_subject_id(&subject_id)?
                    .ok_or_else(|| {
                        AuthError::ResolutionFailed(format!(
                            "conflict on subject '{subject_id}' but no record found on re-fetch"
                        ))
                    })
            }
            Err(err @ StoreError::Unavailable(_)) => Err(err.into()),
        }
    }
}

/// Request-facing entry point: raw `Authorization` header value in,
/// resolved [`Principal`] out.
///
/// Composes the verifier and resolver by constructor injection so either can
/// be substituted in tests. Holds no inter-call state.
pub struct IdentityGateway<V, S> {
    verifier: V,
    resolver: PrincipalResolver<S>,
}

impl<V, S> IdentityGateway<V, S>
where
    V: CredentialVerifier,
    S: PrincipalStore,
{
    pub fn new(verifier: V, store: S) -> Self {
        Self {
            verifier,
            resolver: PrincipalResolver::new(store),
        }
    }

    /// Resolve the principal for a request.
    ///
    /// A missing header, a non-Bearer scheme, or an empty token short-circuit
    /// with [`AuthError::AuthenticationRequired`] before the verifier is
    /// consulted. Verification failures are final for the request.
    pub fn resolve_principal(&self, raw_header: Option<&str>) -> Result<Principal, AuthError> {
        let token = bearer_token(raw_header).ok_or(AuthError::AuthenticationRequired)?;
        let claims = self.verifier.verify(token)?;
        self.resolver.resolve(&claims)
    }
}

/// Extract the token from a `Bearer <token>` header value.
fn bearer_token(raw_header: Option<&str>) -> Option<&str> {
    let value = raw_header?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
