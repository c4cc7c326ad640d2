//! Company API handlers.
//!
//! ```text
//! POST /api/companies
//! PATCH /api/companies/{id}
//! DELETE /api/companies/{id}
//! GET /api/companies/{id}
//! ```
//!
//! Mutations require a bearer token; reads are public. All mutation side
//! effects, including event publication, happen behind the driving ports.

use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::domain::ports::{
    CreateCompanyRequest, DeleteCompanyRequest, GetCompanyRequest, UpdateCompanyRequest,
};
use crate::domain::{Company, CompanyDraft, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::AuthenticatedUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Create a company from a client-supplied draft.
///
/// The server assigns the id; any id in the request body is ignored.
#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CompanyDraft,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["companies"],
    operation_id = "createCompany",
    security(("BearerToken" = []))
)]
#[post("/companies")]
pub async fn create_company(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    payload: web::Json<CompanyDraft>,
) -> ApiResult<HttpResponse> {
    let company = state
        .companies
        .create(CreateCompanyRequest {
            draft: payload.into_inner(),
        })
        .await?;
    Ok(HttpResponse::Created().json(company))
}

/// Replace the company stored under the path id with a revalidated draft.
#[utoipa::path(
    patch,
    path = "/api/companies/{id}",
    params(("id" = String, Path, description = "Company id")),
    request_body = CompanyDraft,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["companies"],
    operation_id = "updateCompany",
    security(("BearerToken" = []))
)]
#[patch("/companies/{id}")]
pub async fn update_company(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CompanyDraft>,
) -> ApiResult<web::Json<Company>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    let company = state
        .companies
        .update(UpdateCompanyRequest {
            id,
            draft: payload.into_inner(),
        })
        .await?;
    Ok(web::Json(company))
}

/// Delete the company stored under the path id.
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(("id" = String, Path, description = "Company id")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["companies"],
    operation_id = "deleteCompany",
    security(("BearerToken" = []))
)]
#[delete("/companies/{id}")]
pub async fn delete_company(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    state.companies.delete(DeleteCompanyRequest { id }).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Fetch a company by id.
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(("id" = String, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company", body = Company),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["companies"],
    operation_id = "getCompany",
    security([])
)]
#[get("/companies/{id}")]
pub async fn get_company(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Company>> {
    let id = parse_uuid(path.into_inner(), FieldName::new("id"))?;
    let company = state.companies_query.get(GetCompanyRequest { id }).await?;
    Ok(web::Json(company))
}

#[cfg(test)]
#[path = "companies_tests.rs"]
mod tests;
