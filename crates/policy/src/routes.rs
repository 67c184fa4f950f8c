//! Canonical route paths.
//!
//! Every shell entry point resolves landing pages against these constants;
//! nothing else hard-codes one. Changing a path here changes it everywhere.

pub const LOGIN: &str = "/login";
pub const PENDING_APPROVAL: &str = "/pending-approval";
pub const SUPER_ADMIN: &str = "/super-admin";
pub const ADMIN: &str = "/admin";
pub const CLUB_DASHBOARD: &str = "/club-dashboard";
pub const MY_PROFILE: &str = "/my-profile";
