//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (companies, users,
//!   health)
//! - **Schemas**: Domain types ([`Company`], [`CompanyDraft`], [`Error`]) and
//!   the auth payloads ([`CredentialsBody`], [`IssuedToken`], [`UserProfile`])
//! - **Security**: Bearer token authentication scheme
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::domain::ports::IssuedToken;
use crate::domain::{Company, CompanyDraft, CompanyType, Error, ErrorCode, UserProfile};
use crate::inbound::http::users::CredentialsBody;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /api/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Company service API",
        description = "HTTP interface for company management, token-authenticated mutations, and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::companies::create_company,
        crate::inbound::http::companies::update_company,
        crate::inbound::http::companies::delete_company,
        crate::inbound::http::companies::get_company,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::login,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        Company,
        CompanyDraft,
        CompanyType,
        CredentialsBody,
        Error,
        ErrorCode,
        IssuedToken,
        UserProfile
    )),
    tags(
        (name = "companies", description = "Operations on the company catalogue"),
        (name = "users", description = "Registration and login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema and path registration.

    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn openapi_company_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let company_schema = schemas.get("Company").expect("Company schema");

        assert_object_schema_has_field(company_schema, "id");
        assert_object_schema_has_field(company_schema, "name");
        assert_object_schema_has_field(company_schema, "amount_of_employees");
        assert_object_schema_has_field(company_schema, "type");
    }

    #[test]
    fn openapi_registers_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/companies",
            "/api/companies/{id}",
            "/api/users",
            "/api/login",
            "/health",
            "/health/ready",
        ] {
            assert!(paths.contains_key(path), "missing path '{path}'");
        }
    }

    #[test]
    fn openapi_declares_the_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().expect("components");

        assert!(components.security_schemes.contains_key("BearerToken"));
    }
}
