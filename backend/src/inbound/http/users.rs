//! User registration and login handlers.
//!
//! ```text
//! POST /api/users {"username":"alice","password":"s3cret"}
//! POST /api/login {"username":"alice","password":"s3cret"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::IssuedToken;
use crate::domain::{Error, LoginCredentials, LoginValidationError, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Credentials body shared by registration and login.
///
/// Example JSON:
/// `{"username":"alice","password":"s3cret"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
}

impl TryFrom<CredentialsBody> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: CredentialsBody) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Register a new account.
///
/// The response carries only the sanitized profile; the password hash never
/// leaves the server.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CredentialsBody,
    responses(
        (status = 201, description = "User created", body = UserProfile),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsBody>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from(payload.into_inner())
        .map_err(|_| Error::invalid_request("Username and password cannot be empty"))?;
    let profile = state.registration.register(&credentials).await?;
    Ok(HttpResponse::Created().json(profile))
}

/// Authenticate and issue a bearer token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = CredentialsBody,
    responses(
        (status = 200, description = "Login success", body = IssuedToken),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsBody>,
) -> ApiResult<web::Json<IssuedToken>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let token = state.login.authenticate(&credentials).await?;
    Ok(web::Json(token))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}
