use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{BrandId, PrincipalId, SubjectId};

use crate::claims::ExternalClaims;
use crate::role::Role;

/// A fully resolved principal for authorization decisions.
///
/// Construction of this record is decoupled from storage and transport: the
/// resolver produces it from verified claims plus one store round trip.
///
/// # Invariants
/// - `subject_id` is unique across principals and is the only lookup key.
/// - Role and brand are never mutated by resolution; a lookup returns the
///   stored record unchanged so claim contents cannot escalate privilege.
/// - `brand_id` may be absent even for a `BrandManager`; brand-scoped
///   operations must reject that state, not treat it as a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub subject_id: SubjectId,
    pub role: Role,
    pub brand_id: Option<BrandId>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Principal {
    pub fn is_at_least(&self, floor: Role) -> bool {
        self.role.at_least(floor)
    }
}

/// Insertable principal record, built from claims on first sight.
///
/// The store assigns nothing: the draft already carries the new id and the
/// default role, so insertion is a plain uniqueness-checked write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalDraft {
    pub id: PrincipalId,
    pub subject_id: SubjectId,
    pub role: Role,
    pub brand_id: Option<BrandId>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PrincipalDraft {
    /// Draft for an unseen subject: role `Client`, no brand affiliation,
    /// display fields copied from the verified claims.
    pub fn from_claims(claims: &ExternalClaims, now: DateTime<Utc>) -> Self {
        Self {
            id: PrincipalId::new(),
            subject_id: claims.subject_id.clone(),
            role: Role::Client,
            brand_id: None,
            email: claims.email.clone(),
            display_name: claims.display_name.clone(),
            avatar_url: claims.avatar_url.clone(),
            created_at: now,
        }
    }

    pub fn into_principal(self) -> Principal {
        Principal {
            id: self.id,
            subject_id: self.subject_id,
            role: self.role,
            brand_id: self.brand_id,
            email: self.email,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        }
    }
}
