use serde::{Deserialize, Serialize};
use std::fmt;

use shared_types::{
    Decision, ReasonCode, ResourceContext, Role, UnknownRoleError, UnknownStatusError, UserContext,
};

use crate::evaluator;

/// Claims the session layer stores for a signed-in user, in the identity
/// store's string format. The embedding application fills this from its
/// session cookie or verified token; this crate never reads either itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    pub uid: String,
    pub role: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
}

/// A session claim field that failed the strict parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    Role(UnknownRoleError),
    Status(UnknownStatusError),
}

impl fmt::Display for ClaimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimsError::Role(err) => write!(f, "bad role claim: {err}"),
            ClaimsError::Status(err) => write!(f, "bad status claim: {err}"),
        }
    }
}

impl std::error::Error for ClaimsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClaimsError::Role(err) => Some(err),
            ClaimsError::Status(err) => Some(err),
        }
    }
}

impl From<UnknownRoleError> for ClaimsError {
    fn from(err: UnknownRoleError) -> Self {
        ClaimsError::Role(err)
    }
}

impl From<UnknownStatusError> for ClaimsError {
    fn from(err: UnknownStatusError) -> Self {
        ClaimsError::Status(err)
    }
}

/// Strictly parse stored claims into a `UserContext`.
///
/// Parse failures propagate as [`ClaimsError`] so the caller sees exactly
/// which stored value was unreadable. Nothing is coerced on this path.
pub fn user_context_from_claims(claims: &SessionClaims) -> Result<UserContext, ClaimsError> {
    let role: Role = claims.role.parse()?;
    let status = claims.status.parse()?;

    let mut user = UserContext::new(claims.uid.clone(), role, status);
    if let Some(club_id) = &claims.club_id {
        user = user.with_club(club_id.clone());
    }
    Ok(user)
}

/// Evaluate `resource` access for a session, absorbing claim corruption.
///
/// This is the embedding boundary: an unparseable role or status means the
/// identity assertion cannot be trusted, so the anomaly is logged as a
/// data-integrity warning and the request denied as unauthenticated. The
/// request pipeline never sees a panic or an error from here.
#[tracing::instrument]
pub fn authorize(claims: Option<&SessionClaims>, resource: &ResourceContext) -> Decision {
    let Some(claims) = claims else {
        return evaluator::evaluate(None, resource);
    };

    match user_context_from_claims(claims) {
        Ok(user) => evaluator::evaluate(Some(&user), resource),
        Err(err) => {
            tracing::warn!(uid = %claims.uid, error = %err, "rejecting session with unreadable claims");
            Decision::deny(ReasonCode::Unauthenticated)
        }
    }
}
