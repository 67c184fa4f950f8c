use policy::{resolve_target, routes, NavContext};
use pretty_assertions::assert_eq;
use shared_types::{AccountStatus, NavigationTarget, Role};

fn ctx(role: Role, status: AccountStatus, current_path: &str) -> NavContext {
    NavContext {
        is_authenticated: true,
        role: Some(role),
        status: Some(status),
        current_path: current_path.into(),
    }
}

#[test]
fn test_anonymous_visitor_is_sent_to_login() {
    let ctx = NavContext::from_claims(false, None, None, "/dashboard");
    assert_eq!(
        resolve_target(&ctx),
        NavigationTarget {
            path: routes::LOGIN.into(),
            redirect_required: true,
        }
    );
}

#[test]
fn test_login_page_is_a_fixed_point_for_anonymous_visitors() {
    let ctx = NavContext::from_claims(false, None, None, "/login");
    assert_eq!(
        resolve_target(&ctx),
        NavigationTarget {
            path: routes::LOGIN.into(),
            redirect_required: false,
        }
    );
}

#[test]
fn test_pending_member_on_pending_page_stays_put() {
    let target = resolve_target(&ctx(Role::Member, AccountStatus::Pending, "/pending-approval"));
    assert!(!target.redirect_required);
    assert_eq!(target.path, routes::PENDING_APPROVAL);
}

#[test]
fn test_pending_status_overrides_every_role_band() {
    for role in Role::ALL {
        let target = resolve_target(&ctx(role, AccountStatus::Pending, "/"));
        assert_eq!(target.path, routes::PENDING_APPROVAL, "{role}");
    }
}

#[test]
fn test_active_roles_land_on_their_band() {
    let cases = [
        (Role::SuperAdmin, routes::SUPER_ADMIN),
        (Role::Admin, routes::SUPER_ADMIN),
        (Role::FederationAdmin, routes::ADMIN),
        (Role::ClubOwner, routes::CLUB_DASHBOARD),
        (Role::ClubManager, routes::CLUB_DASHBOARD),
        (Role::Coach, routes::MY_PROFILE),
        (Role::Member, routes::MY_PROFILE),
    ];
    for (role, expected) in cases {
        let target = resolve_target(&ctx(role, AccountStatus::Active, "/somewhere"));
        assert_eq!(target.path, expected, "{role}");
        assert!(target.redirect_required, "{role}");
    }
}

#[test]
fn test_inactive_users_fall_through_to_their_role_band() {
    let target = resolve_target(&ctx(Role::ClubManager, AccountStatus::Inactive, "/"));
    assert_eq!(target.path, routes::CLUB_DASHBOARD);
}

#[test]
fn test_corrupt_role_claim_never_escalates() {
    for bad in ["SUPREME_LEADER", "", "admin2", "  SUPER_ADMIN  "] {
        let ctx = NavContext::from_claims(true, Some(bad), Some("active"), "/");
        assert_eq!(resolve_target(&ctx).path, routes::MY_PROFILE, "{bad:?}");
    }
}

#[test]
fn test_resolving_twice_gives_identical_targets() {
    let ctx = NavContext::from_claims(true, Some("FEDERATION_ADMIN"), Some("active"), "/my-profile");
    assert_eq!(resolve_target(&ctx), resolve_target(&ctx));
}

#[test]
fn test_following_the_redirect_terminates() {
    // From any starting state, one hop lands on a page that resolves to
    // itself. This is the no-redirect-loop guarantee.
    for role in Role::ALL {
        for status in [AccountStatus::Pending, AccountStatus::Active, AccountStatus::Inactive] {
            let start = ctx(role, status, "/dashboard");
            let first = resolve_target(&start);

            let landed = NavContext {
                current_path: first.path.clone(),
                ..start
            };
            let second = resolve_target(&landed);

            assert_eq!(second.path, first.path, "{role} {status:?}");
            assert!(!second.redirect_required, "{role} {status:?}");
        }
    }
}
