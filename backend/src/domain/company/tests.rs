//! Tests for the company model and its ordered validation sequence.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const COMPANY_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn company_id() -> Uuid {
    Uuid::parse_str(COMPANY_ID).expect("fixture UUID is valid")
}

#[fixture]
fn valid_draft() -> CompanyDraft {
    CompanyDraft {
        name: "Initech".to_owned(),
        description: Some("Makes TPS report software".to_owned()),
        amount_of_employees: Some(120),
        registered: Some(true),
        company_type: Some("Corporation".to_owned()),
    }
}

#[rstest]
fn accepts_valid_draft(valid_draft: CompanyDraft) {
    let company = Company::new(company_id(), valid_draft).expect("draft satisfies all checks");
    assert_eq!(company.id(), company_id());
    assert_eq!(company.name().as_ref(), "Initech");
    assert_eq!(company.amount_of_employees(), 120);
    assert!(company.registered());
    assert_eq!(company.company_type(), CompanyType::Corporation);
}

#[rstest]
fn accepts_boundary_name_length(mut valid_draft: CompanyDraft) {
    valid_draft.name = "a".repeat(COMPANY_NAME_MAX);
    assert!(Company::new(company_id(), valid_draft).is_ok());
}

#[rstest]
fn accepts_boundary_description_length(mut valid_draft: CompanyDraft) {
    valid_draft.description = Some("d".repeat(DESCRIPTION_MAX));
    assert!(Company::new(company_id(), valid_draft).is_ok());
}

#[rstest]
fn accepts_zero_employees(mut valid_draft: CompanyDraft) {
    valid_draft.amount_of_employees = Some(0);
    assert!(Company::new(company_id(), valid_draft).is_ok());
}

#[rstest]
fn accepts_missing_description(mut valid_draft: CompanyDraft) {
    valid_draft.description = None;
    let company = Company::new(company_id(), valid_draft).expect("description is optional");
    assert!(company.description().is_none());
}

#[rstest]
#[case::empty_name("", CompanyValidationError::InvalidName)]
#[case::name_too_long(&"a".repeat(COMPANY_NAME_MAX + 1), CompanyValidationError::InvalidName)]
fn rejects_invalid_names(
    mut valid_draft: CompanyDraft,
    #[case] name: &str,
    #[case] expected: CompanyValidationError,
) {
    valid_draft.name = name.to_owned();
    let error = Company::new(company_id(), valid_draft).expect_err("name check fails");
    assert_eq!(error, expected);
}

#[rstest]
fn rejects_missing_employee_count(mut valid_draft: CompanyDraft) {
    valid_draft.amount_of_employees = None;
    let error = Company::new(company_id(), valid_draft).expect_err("presence check fails");
    assert_eq!(error, CompanyValidationError::MissingEmployeeCount);
    assert_eq!(error.to_string(), "amount of employees is required");
}

#[rstest]
fn rejects_negative_employee_count(mut valid_draft: CompanyDraft) {
    valid_draft.amount_of_employees = Some(-1);
    let error = Company::new(company_id(), valid_draft).expect_err("sign check fails");
    assert_eq!(error, CompanyValidationError::NegativeEmployeeCount);
    assert_eq!(
        error.to_string(),
        "invalid amount of employees: cannot be negative"
    );
}

#[rstest]
fn rejects_missing_registered(mut valid_draft: CompanyDraft) {
    valid_draft.registered = None;
    let error = Company::new(company_id(), valid_draft).expect_err("presence check fails");
    assert_eq!(error, CompanyValidationError::MissingRegistered);
    assert_eq!(error.to_string(), "registered status is required");
}

#[rstest]
fn rejects_missing_type(mut valid_draft: CompanyDraft) {
    valid_draft.company_type = None;
    let error = Company::new(company_id(), valid_draft).expect_err("presence check fails");
    assert_eq!(error, CompanyValidationError::MissingType);
    assert_eq!(error.to_string(), "company type is required");
}

#[rstest]
#[case("LLC")]
#[case("corporation")]
#[case("SoleProprietorship")]
fn rejects_unknown_types(mut valid_draft: CompanyDraft, #[case] company_type: &str) {
    valid_draft.company_type = Some(company_type.to_owned());
    let error = Company::new(company_id(), valid_draft).expect_err("membership check fails");
    assert_eq!(error, CompanyValidationError::InvalidType);
    assert_eq!(error.to_string(), "invalid company type");
}

#[rstest]
fn rejects_oversized_description(mut valid_draft: CompanyDraft) {
    valid_draft.description = Some("d".repeat(DESCRIPTION_MAX + 1));
    let error = Company::new(company_id(), valid_draft).expect_err("length check fails");
    assert_eq!(error, CompanyValidationError::InvalidDescription);
}

/// Drafts violating several rules must report the earliest check only.
#[rstest]
#[case::name_before_employees(
    CompanyDraft::default(),
    CompanyValidationError::InvalidName
)]
#[case::employees_before_registered(
    CompanyDraft { name: "Initech".to_owned(), ..CompanyDraft::default() },
    CompanyValidationError::MissingEmployeeCount
)]
#[case::sign_before_registered(
    CompanyDraft {
        name: "Initech".to_owned(),
        amount_of_employees: Some(-3),
        ..CompanyDraft::default()
    },
    CompanyValidationError::NegativeEmployeeCount
)]
#[case::registered_before_type(
    CompanyDraft {
        name: "Initech".to_owned(),
        amount_of_employees: Some(1),
        ..CompanyDraft::default()
    },
    CompanyValidationError::MissingRegistered
)]
#[case::type_before_description(
    CompanyDraft {
        name: "Initech".to_owned(),
        amount_of_employees: Some(1),
        registered: Some(false),
        description: Some("d".repeat(DESCRIPTION_MAX + 1)),
        ..CompanyDraft::default()
    },
    CompanyValidationError::MissingType
)]
fn first_failure_wins(#[case] draft: CompanyDraft, #[case] expected: CompanyValidationError) {
    let error = Company::new(company_id(), draft).expect_err("draft is invalid");
    assert_eq!(error, expected);
}

#[rstest]
#[case("Corporation", CompanyType::Corporation)]
#[case("NonProfit", CompanyType::NonProfit)]
#[case("Cooperative", CompanyType::Cooperative)]
#[case("Sole Proprietorship", CompanyType::SoleProprietorship)]
fn company_type_parses_wire_values(#[case] wire: &str, #[case] expected: CompanyType) {
    let parsed: CompanyType = wire.parse().expect("wire value is a member of the set");
    assert_eq!(parsed, expected);
    assert_eq!(parsed.as_str(), wire);
}

#[rstest]
fn serialises_to_wire_format(valid_draft: CompanyDraft) {
    let company = Company::new(company_id(), valid_draft).expect("valid draft");
    let value = serde_json::to_value(company).expect("company serialises");

    assert_eq!(
        value,
        json!({
            "id": COMPANY_ID,
            "name": "Initech",
            "description": "Makes TPS report software",
            "amount_of_employees": 120,
            "registered": true,
            "type": "Corporation",
        })
    );
}

#[rstest]
fn serialisation_omits_absent_description(mut valid_draft: CompanyDraft) {
    valid_draft.description = None;
    let company = Company::new(company_id(), valid_draft).expect("valid draft");
    let value = serde_json::to_value(company).expect("company serialises");

    assert!(value.get("description").is_none());
}

#[rstest]
fn deserialisation_enforces_validation() {
    let result: Result<Company, _> = serde_json::from_value(json!({
        "id": COMPANY_ID,
        "name": "a name that is far too long",
        "amount_of_employees": 10,
        "registered": true,
        "type": "Corporation",
    }));

    assert!(result.is_err());
}

#[rstest]
fn deserialisation_round_trips(valid_draft: CompanyDraft) {
    let company = Company::new(company_id(), valid_draft).expect("valid draft");
    let encoded = serde_json::to_string(&company).expect("company serialises");
    let decoded: Company = serde_json::from_str(&encoded).expect("company deserialises");

    assert_eq!(decoded, company);
}

#[rstest]
fn draft_ignores_client_supplied_id() {
    let draft: CompanyDraft = serde_json::from_value(json!({
        "id": COMPANY_ID,
        "name": "Initech",
        "amount_of_employees": 10,
        "registered": true,
        "type": "Corporation",
    }))
    .expect("unknown fields are ignored");

    assert_eq!(draft.name, "Initech");
}

#[rstest]
fn draft_defaults_absent_fields_to_none() {
    let draft: CompanyDraft =
        serde_json::from_value(json!({ "name": "Initech" })).expect("partial payload decodes");

    assert!(draft.amount_of_employees.is_none());
    assert!(draft.registered.is_none());
    assert!(draft.company_type.is_none());
    assert!(draft.description.is_none());
}
