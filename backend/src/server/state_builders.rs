//! Builders for HTTP state ports and repository-backed service pairs.
//!
//! Each builder picks the database-backed implementation when a pool is
//! configured and falls back to the fixture otherwise, so the server always
//! starts even without infrastructure.

use std::sync::Arc;

use actix_web::web;

use company_service::domain::ports::{
    CompanyCommand, CompanyQuery, FixtureCompanyCommand, FixtureCompanyQuery,
    FixtureEventPublisher, FixtureLoginService, FixtureTokenService, FixtureUserRegistration,
    LoginService, TokenService, UserRegistration,
};
use company_service::domain::{CompanyCommandService, CompanyQueryService, UserService};
use company_service::inbound::http::state::{HttpState, HttpStatePorts};
use company_service::outbound::auth::BcryptPasswordHasher;
use company_service::outbound::persistence::{DieselCompanyRepository, DieselUserRepository};

use super::ServerConfig;

/// Build company command and query ports, selecting the database-backed
/// services when a pool is available and fixtures otherwise.
fn build_company_ports_with_pool<Pool, Query>(
    pool: &Option<Pool>,
    make_services: impl FnOnce(&Pool) -> (Arc<dyn CompanyCommand>, Query),
) -> (Arc<dyn CompanyCommand>, Arc<dyn CompanyQuery>)
where
    Query: CompanyQuery + 'static,
{
    match pool {
        Some(pool) => {
            let (command, query) = make_services(pool);
            (command, Arc::new(query) as Arc<dyn CompanyQuery>)
        }
        None => (
            Arc::new(FixtureCompanyCommand) as Arc<dyn CompanyCommand>,
            Arc::new(FixtureCompanyQuery) as Arc<dyn CompanyQuery>,
        ),
    }
}

fn build_company_ports(config: &ServerConfig) -> (Arc<dyn CompanyCommand>, Arc<dyn CompanyQuery>) {
    build_company_ports_with_pool(&config.db_pool, |pool| {
        let repo = Arc::new(DieselCompanyRepository::new(pool.clone()));
        let command: Arc<dyn CompanyCommand> = match &config.events {
            Some(events) => Arc::new(CompanyCommandService::new(repo.clone(), events.clone())),
            None => Arc::new(CompanyCommandService::new(
                repo.clone(),
                Arc::new(FixtureEventPublisher),
            )),
        };
        (command, CompanyQueryService::new(repo))
    })
}

/// Build the registration, login, and token-verification ports as one unit.
///
/// The three ports must agree: the database-backed branch issues and checks
/// JWTs, while the fixture branch issues and checks the fixture token.
fn build_user_ports_with_pool<Pool, Service>(
    pool: &Option<Pool>,
    tokens: Arc<dyn TokenService>,
    make_service: impl FnOnce(&Pool) -> Service,
) -> (
    Arc<dyn UserRegistration>,
    Arc<dyn LoginService>,
    Arc<dyn TokenService>,
)
where
    Service: UserRegistration + LoginService + 'static,
{
    match pool {
        Some(pool) => {
            let service = Arc::new(make_service(pool));
            (
                service.clone() as Arc<dyn UserRegistration>,
                service as Arc<dyn LoginService>,
                tokens,
            )
        }
        None => (
            Arc::new(FixtureUserRegistration) as Arc<dyn UserRegistration>,
            Arc::new(FixtureLoginService) as Arc<dyn LoginService>,
            Arc::new(FixtureTokenService) as Arc<dyn TokenService>,
        ),
    }
}

fn build_user_ports(
    config: &ServerConfig,
) -> (
    Arc<dyn UserRegistration>,
    Arc<dyn LoginService>,
    Arc<dyn TokenService>,
) {
    build_user_ports_with_pool(&config.db_pool, config.tokens.clone(), |pool| {
        UserService::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(BcryptPasswordHasher::default()),
            config.tokens.clone(),
        )
    })
}

/// Build the shared HTTP state from configured ports and fixture fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (companies, companies_query) = build_company_ports(config);
    let (registration, login, tokens) = build_user_ports(config);

    web::Data::new(HttpState::new(HttpStatePorts {
        companies,
        companies_query,
        registration,
        login,
        tokens,
    }))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use company_service::domain::ports::{
        CreateCompanyRequest, FIXTURE_TOKEN, GetCompanyRequest, IssuedToken,
    };
    use company_service::domain::{Company, CompanyDraft, Error, LoginCredentials, UserProfile};
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    const STUB_COMPANY_NAME: &str = "Stub Co";
    const STUB_USERNAME: &str = "db-user";

    #[derive(Clone, Copy)]
    struct StubCompanyQuery;

    #[async_trait]
    impl CompanyQuery for StubCompanyQuery {
        async fn get(&self, request: GetCompanyRequest) -> Result<Company, Error> {
            Company::new(
                request.id,
                CompanyDraft {
                    name: STUB_COMPANY_NAME.to_owned(),
                    description: None,
                    amount_of_employees: Some(1),
                    registered: Some(false),
                    company_type: Some("Corporation".to_owned()),
                },
            )
            .map_err(|err| Error::internal(err.to_string()))
        }
    }

    #[derive(Clone, Copy)]
    struct StubUserService;

    #[async_trait]
    impl UserRegistration for StubUserService {
        async fn register(&self, _credentials: &LoginCredentials) -> Result<UserProfile, Error> {
            Ok(UserProfile {
                id: Uuid::new_v4(),
                username: STUB_USERNAME.to_owned(),
            })
        }
    }

    #[async_trait]
    impl LoginService for StubUserService {
        async fn authenticate(
            &self,
            _credentials: &LoginCredentials,
        ) -> Result<IssuedToken, Error> {
            Ok(IssuedToken {
                token: "stub-token".to_owned(),
                created_at: 0,
                expires_at: 1,
            })
        }
    }

    #[rstest]
    #[tokio::test]
    async fn pool_present_selects_database_backed_company_ports() {
        let id = Uuid::new_v4();
        let (command, query) = build_company_ports_with_pool(&Some(()), |_| {
            (
                Arc::new(FixtureCompanyCommand) as Arc<dyn CompanyCommand>,
                StubCompanyQuery,
            )
        });

        let company = query
            .get(GetCompanyRequest { id })
            .await
            .expect("stub query should answer");
        assert_eq!(company.name().as_ref(), STUB_COMPANY_NAME);

        // The command side still validates drafts regardless of branch.
        let error = command
            .create(CreateCompanyRequest {
                draft: CompanyDraft::default(),
            })
            .await
            .expect_err("empty draft must fail");
        assert!(error.message().contains("invalid company name"));
    }

    #[rstest]
    #[tokio::test]
    async fn pool_absent_keeps_fixture_company_ports() {
        let (_, query) = build_company_ports_with_pool::<(), StubCompanyQuery>(&None, |_| {
            unreachable!("fixture branch must not build services")
        });

        let company = query
            .get(GetCompanyRequest { id: Uuid::new_v4() })
            .await
            .expect("fixture query answers every id");
        assert_eq!(company.name().as_ref(), "Fixture Co");
    }

    #[rstest]
    #[tokio::test]
    async fn pool_present_routes_auth_through_the_stub_service() {
        let (registration, login, _) = build_user_ports_with_pool(
            &Some(()),
            Arc::new(FixtureTokenService),
            |_| StubUserService,
        );

        let credentials =
            LoginCredentials::try_from_parts("alice", "password").expect("credentials shape");

        let profile = registration
            .register(&credentials)
            .await
            .expect("stub registration succeeds");
        assert_eq!(profile.username, STUB_USERNAME);

        let issued = login
            .authenticate(&credentials)
            .await
            .expect("stub login succeeds");
        assert_eq!(issued.token, "stub-token");
    }

    #[rstest]
    #[tokio::test]
    async fn pool_absent_issues_and_accepts_the_fixture_token() {
        let (_, login, tokens) = build_user_ports_with_pool::<(), StubUserService>(
            &None,
            Arc::new(FixtureTokenService),
            |_| unreachable!("fixture branch must not build services"),
        );

        let credentials =
            LoginCredentials::try_from_parts("alice", "password").expect("credentials shape");
        let issued = login
            .authenticate(&credentials)
            .await
            .expect("fixture login succeeds");

        assert_eq!(issued.token, FIXTURE_TOKEN);
        let claims = tokens
            .verify(&issued.token)
            .expect("fixture token verifies");
        assert_eq!(claims.subject, "fixture-user");
    }
}
