//! Access-policy evaluation and navigation routing.
//!
//! Everything here is a pure function over caller-supplied context: the
//! embedding application extracts `UserContext` / session claims from its
//! request pipeline, asks this crate for a [`shared_types::Decision`] or a
//! [`shared_types::NavigationTarget`], and turns the answer into an HTTP
//! status or a client-side redirect. There is exactly one authorization
//! code path and one routing state machine, so there is exactly one place
//! to test and audit.

pub mod evaluator;
pub mod guard;
pub mod navigation;
pub mod routes;

pub use evaluator::evaluate;
pub use guard::{authorize, user_context_from_claims, ClaimsError, SessionClaims};
pub use navigation::{resolve_target, NavContext};
