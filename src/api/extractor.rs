//! Authentication extractor.
//!
//! A request is authenticated when it carries `Authorization: Bearer <token>`
//! and the token belongs to a stored session. Rejection happens before the
//! handler body runs, so no eligibility check is ever made for anonymous calls.

use crate::{
    api::AppState,
    core::session::find_session_by_token,
    errors::{Error, Result},
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

/// The signed-in caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizedUser {
    user_id: i32,
}

impl AuthorizedUser {
    /// Id of the user that owns the presented session.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.user_id
    }
}

fn unauthorized(reason: &str) -> Error {
    Error::Unauthorized {
        reason: reason.to_string(),
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("missing authorization header"))?
        .to_str()
        .map_err(|_| unauthorized("authorization header is not valid ASCII"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("authorization scheme is not Bearer"))?
        .trim();

    if token.is_empty() {
        return Err(unauthorized("empty bearer token"));
    }
    Ok(token)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthorizedUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(&parts.headers)?;
        let session = find_session_by_token(&state.database, token)
            .await?
            .ok_or_else(|| unauthorized("unknown session token"))?;

        Ok(Self {
            user_id: session.user_id,
        })
    }
}
