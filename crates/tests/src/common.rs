use policy::SessionClaims;
use shared_types::{AccountStatus, ResourceContext, Role, UserContext};

/// An active user with the given role and no club affiliation.
pub fn active_user(role: Role) -> UserContext {
    UserContext::new("test-uid", role, AccountStatus::Active)
}

/// An active user attached to `club_id`.
pub fn club_user(role: Role, club_id: &str) -> UserContext {
    active_user(role).with_club(club_id)
}

/// A freshly registered user still waiting for approval.
pub fn pending_user(role: Role) -> UserContext {
    UserContext::new("test-uid", role, AccountStatus::Pending)
}

/// A resource owned by `club_id` with no role gate.
pub fn club_resource(club_id: &str) -> ResourceContext {
    ResourceContext::default().with_owner_club(club_id)
}

/// Session claims in the identity store's stored-string format.
pub fn session(role: &str, status: &str, club_id: Option<&str>) -> SessionClaims {
    SessionClaims {
        uid: "test-uid".into(),
        role: role.into(),
        status: status.into(),
        club_id: club_id.map(Into::into),
    }
}
