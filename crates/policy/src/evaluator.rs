use shared_types::{AccountStatus, Decision, ReasonCode, ResourceContext, UserContext};

/// Decide whether `user` may act on `resource`.
///
/// Checks run in a fixed order: authentication, approval status, role,
/// club scope. The first failing check's reason is the one reported, so a
/// request that fails several checks always surfaces the same code to UI
/// messaging and audit logging.
///
/// Pure function: no logging, no mutation of either context.
pub fn evaluate(user: Option<&UserContext>, resource: &ResourceContext) -> Decision {
    let Some(user) = user else {
        return Decision::deny(ReasonCode::Unauthenticated);
    };

    // A pending user may still interact with the approval workflow itself;
    // approval-workflow records are the ones carrying an approval state.
    if user.status == AccountStatus::Pending && resource.approval_state.is_none() {
        return Decision::deny(ReasonCode::PendingApproval);
    }

    if let Some(required) = &resource.required_role {
        if !user.role.has_equal_or_higher_role(required) {
            return Decision::deny(ReasonCode::InsufficientRole);
        }
    }

    if let Some(owner_club) = resource.owner_club_id.as_deref() {
        // Federation-level roles and system accounts have cross-club
        // authority; club-scoped roles must match the owning club exactly.
        if user.role.is_club_scoped() && user.club_id.as_deref() != Some(owner_club) {
            return Decision::deny(ReasonCode::ClubMismatch);
        }
    }

    Decision::allow()
}
