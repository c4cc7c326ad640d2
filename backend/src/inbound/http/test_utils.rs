//! Test helpers for inbound HTTP components.

use actix_web::http::header;

use crate::domain::ports::FIXTURE_TOKEN;

/// `Authorization` header carrying the fixture bearer token accepted by
/// `FixtureTokenService`.
pub fn fixture_bearer_header() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {FIXTURE_TOKEN}"))
}
