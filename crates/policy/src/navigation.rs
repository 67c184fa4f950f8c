use shared_types::{AccountStatus, NavigationTarget, Role};

use crate::routes;

/// Inputs for one navigation decision, extracted from the session by the
/// embedding shell.
#[derive(Debug, Clone, PartialEq)]
pub struct NavContext {
    pub is_authenticated: bool,
    /// Role claim, if the session carries one. `None` falls into the
    /// lowest-privilege band.
    pub role: Option<Role>,
    /// Account status, if known. Only `pending` is routed specially.
    pub status: Option<AccountStatus>,
    /// Path the user is currently on, used to suppress no-op redirects.
    pub current_path: String,
}

impl NavContext {
    /// Build from raw session claims.
    ///
    /// Both parses fail closed: an unreadable role lands in the lowest band
    /// and an unreadable status is treated as pending. Navigation must
    /// never strand the user, and it must never escalate on corrupt data,
    /// so this path deliberately does not surface parse errors the way the
    /// policy path does.
    pub fn from_claims(
        is_authenticated: bool,
        role: Option<&str>,
        status: Option<&str>,
        current_path: impl Into<String>,
    ) -> Self {
        Self {
            is_authenticated,
            role: role.map(Role::from_str_or_default),
            status: status.map(AccountStatus::from_str_or_default),
            current_path: current_path.into(),
        }
    }
}

/// Compute the canonical landing page for `ctx`.
///
/// Deterministic: the same context always yields the same target, and a
/// user already on the canonical path gets `redirect_required: false`, so
/// feeding the result back in can never produce a redirect loop.
pub fn resolve_target(ctx: &NavContext) -> NavigationTarget {
    let path = canonical_path(ctx);
    NavigationTarget {
        redirect_required: path != ctx.current_path,
        path: path.to_string(),
    }
}

fn canonical_path(ctx: &NavContext) -> &'static str {
    if !ctx.is_authenticated {
        return routes::LOGIN;
    }

    if ctx.status == Some(AccountStatus::Pending) {
        return routes::PENDING_APPROVAL;
    }

    // Highest band first so a role can only ever land on one page. A
    // missing role falls through to the lowest band.
    match ctx.role.unwrap_or_default() {
        Role::SuperAdmin | Role::Admin => routes::SUPER_ADMIN,
        Role::FederationAdmin => routes::ADMIN,
        Role::ClubOwner | Role::ClubManager => routes::CLUB_DASHBOARD,
        Role::Member | Role::Coach => routes::MY_PROFILE,
    }
}
