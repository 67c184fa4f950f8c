use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownRoleError;

/// Privilege level assigned to a user account, lowest to highest.
///
/// - `Member` — regular club member. Own profile and club-public records.
/// - `Coach` — runs classes and level tests for their club.
/// - `ClubManager` — day-to-day club administration.
/// - `ClubOwner` — full authority over a single club.
/// - `FederationAdmin` — federation staff with cross-club authority.
/// - `SuperAdmin` — platform operator.
/// - `Admin` — system-account tag. Not a position in the organizational
///   ladder; ranked alongside `SuperAdmin` so system accounts are never
///   locked out of a role-gated feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Member,
    Coach,
    ClubManager,
    ClubOwner,
    FederationAdmin,
    SuperAdmin,
    Admin,
}

impl Role {
    /// The fixed role set, ascending rank, system tag last.
    pub const ALL: [Role; 7] = [
        Role::Member,
        Role::Coach,
        Role::ClubManager,
        Role::ClubOwner,
        Role::FederationAdmin,
        Role::SuperAdmin,
        Role::Admin,
    ];

    /// Numeric rank for privilege comparison.
    ///
    /// Rank values are a stored contract: persisted authorization decisions
    /// reference them, so they must never be renumbered between releases.
    pub fn rank(&self) -> u8 {
        match self {
            Role::Member => 30,
            Role::Coach => 50,
            Role::ClubManager => 65,
            Role::ClubOwner => 70,
            Role::FederationAdmin => 90,
            Role::SuperAdmin => 100,
            // System tag, pinned to the top of the ladder.
            Role::Admin => 100,
        }
    }

    /// Returns true if this role is at least as privileged as `required`.
    pub fn has_equal_or_higher_role(&self, required: &Role) -> bool {
        self.rank() >= required.rank()
    }

    /// Three-way rank comparison. `Admin` compares equal to `SuperAdmin`.
    pub fn compare(&self, other: &Role) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Returns true if this role's authority stops at its own club.
    /// Federation-level roles and system accounts act across clubs.
    pub fn is_club_scoped(&self) -> bool {
        self.rank() < Role::FederationAdmin.rank()
    }

    /// Parse a stored role string, failing closed to `Member` for unknown
    /// values. Used on the navigation path, where a corrupt role must land
    /// the user on the lowest-privilege page rather than strand them.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Stored string form, as written by the identity store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "MEMBER",
            Role::Coach => "COACH",
            Role::ClubManager => "CLUB_MANAGER",
            Role::ClubOwner => "CLUB_OWNER",
            Role::FederationAdmin => "FEDERATION_ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    /// Strict parse used on the policy path. Unknown values surface as
    /// `UnknownRoleError`, never coerced: a role the identity store cannot
    /// name is a data-integrity problem the caller must see.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MEMBER" => Ok(Role::Member),
            "COACH" => Ok(Role::Coach),
            "CLUB_MANAGER" => Ok(Role::ClubManager),
            "CLUB_OWNER" => Ok(Role::ClubOwner),
            "FEDERATION_ADMIN" => Ok(Role::FederationAdmin),
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRoleError::new(s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
