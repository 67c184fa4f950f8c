use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;
use crate::status::{AccountStatus, ApprovalState};

/// Caller identity for a single authorization decision.
///
/// Built from a verified identity assertion at authentication time and
/// immutable for the duration of the decision. Only the external approval
/// workflow changes a user's status or role, and that happens in the
/// identity store, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserContext {
    pub uid: String,
    pub role: Role,
    pub status: AccountStatus,
    /// Club the user belongs to. Absent for accounts not yet attached to a
    /// club and for most system accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
}

impl UserContext {
    pub fn new(uid: impl Into<String>, role: Role, status: AccountStatus) -> Self {
        Self {
            uid: uid.into(),
            role,
            status,
            club_id: None,
        }
    }

    pub fn with_club(mut self, club_id: impl Into<String>) -> Self {
        self.club_id = Some(club_id.into());
        self
    }
}

/// The thing being accessed: a record, a page, an administrative action.
///
/// Constructed by the caller per request and never persisted. Every field
/// is optional; an empty `ResourceContext` describes a resource with no
/// gate beyond authentication and an approved account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceContext {
    /// Minimum role needed to act on the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<Role>,
    /// Club that owns the resource. Club-scoped callers must match it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_club_id: Option<String>,
    /// Present only on approval-workflow records. Its presence is what lets
    /// a pending user interact with their own registration request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_state: Option<ApprovalState>,
}

impl ResourceContext {
    pub fn with_required_role(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }

    pub fn with_owner_club(mut self, club_id: impl Into<String>) -> Self {
        self.owner_club_id = Some(club_id.into());
        self
    }

    pub fn with_approval_state(mut self, state: ApprovalState) -> Self {
        self.approval_state = Some(state);
        self
    }
}

/// Why an access decision came out the way it did.
///
/// Returned, never thrown, so callers can branch on it for user-facing
/// messaging and audit logging.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    Unauthenticated,
    PendingApproval,
    InsufficientRole,
    ClubMismatch,
    Ok,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::Unauthenticated => "UNAUTHENTICATED",
            ReasonCode::PendingApproval => "PENDING_APPROVAL",
            ReasonCode::InsufficientRole => "INSUFFICIENT_ROLE",
            ReasonCode::ClubMismatch => "CLUB_MISMATCH",
            ReasonCode::Ok => "OK",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one access-policy evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub reason: ReasonCode,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: ReasonCode::Ok,
        }
    }

    pub fn deny(reason: ReasonCode) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

/// Canonical landing page for a user, plus whether the shell needs to
/// redirect to get there. `redirect_required` is false exactly when the
/// user is already on the canonical path, which is what breaks redirect
/// loops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub redirect_required: bool,
}
