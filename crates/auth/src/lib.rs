//! `vitrine-auth` — identity resolution and ranked-role authorization.
//!
//! This crate is intentionally decoupled from HTTP and storage. Credential
//! verification and principal persistence sit behind traits; everything else
//! is a pure policy decision over the resolved [`Principal`].

pub mod authorize;
pub mod claims;
pub mod error;
pub mod principal;
pub mod resolver;
pub mod role;
pub mod store;

pub use authorize::{
    authorize, authorize_exact, can_access_brand, can_access_owned_resource, require_brand_access,
    require_owned_resource, require_role, require_role_exact,
};
pub use claims::{CredentialVerifier, ExternalClaims, VerificationError};
pub use error::AuthError;
pub use principal::{Principal, PrincipalDraft};
pub use resolver::{IdentityGateway, PrincipalResolver};
pub use role::Role;
pub use store::{InMemoryPrincipalStore, PrincipalStore, StoreError};
