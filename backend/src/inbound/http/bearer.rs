//! Bearer-token guard for protected HTTP routes.
//!
//! Extracting [`AuthenticatedUser`] in a handler signature rejects the
//! request with `401 Unauthorized` before the handler body runs, so
//! protected routes cause no side effects for unauthenticated callers.

use std::future::{Ready, ready};

use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use crate::domain::Error;
use crate::inbound::http::state::HttpState;

/// Identity recovered from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    subject: String,
}

impl AuthenticatedUser {
    /// Username the presented token was issued to.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Pull the token out of the `Authorization` header.
///
/// Only the exact `Bearer <token>` shape counts as a presented token; a
/// missing header or any other shape reads as no token at all.
fn extract_token(req: &HttpRequest) -> Option<&str> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

fn authenticate_request(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("http state missing from app data"))?;

    let token =
        extract_token(req).ok_or_else(|| Error::unauthorized("Unauthorized - no token provided"))?;

    let claims = state
        .tokens
        .verify(token)
        .map_err(|_| Error::unauthorized("Unauthorized - invalid token"))?;

    Ok(AuthenticatedUser {
        subject: claims.subject,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate_request(req))
    }
}
