//! Company data model and validation.
//!
//! [`CompanyDraft`] carries a client-supplied payload without any guarantees.
//! [`Company::new`] runs the ordered validation sequence and is the only way
//! to obtain a [`Company`], so a constructed value always satisfies the
//! invariants below.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Longest accepted company name, in characters.
pub const COMPANY_NAME_MAX: usize = 15;
/// Longest accepted company description, in characters.
pub const DESCRIPTION_MAX: usize = 3000;

/// Validation failures raised while promoting a draft to a [`Company`].
///
/// Checks run in a fixed order and stop at the first failure, so a draft
/// violating several rules reports only the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyValidationError {
    InvalidName,
    MissingEmployeeCount,
    NegativeEmployeeCount,
    MissingRegistered,
    MissingType,
    InvalidType,
    InvalidDescription,
}

impl fmt::Display for CompanyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(
                f,
                "invalid company name: must be non-empty and up to {COMPANY_NAME_MAX} characters"
            ),
            Self::MissingEmployeeCount => write!(f, "amount of employees is required"),
            Self::NegativeEmployeeCount => {
                write!(f, "invalid amount of employees: cannot be negative")
            }
            Self::MissingRegistered => write!(f, "registered status is required"),
            Self::MissingType => write!(f, "company type is required"),
            Self::InvalidType => write!(f, "invalid company type"),
            Self::InvalidDescription => write!(
                f,
                "invalid description: must be up to {DESCRIPTION_MAX} characters"
            ),
        }
    }
}

impl std::error::Error for CompanyValidationError {}

/// Validated company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    /// Validate and construct a [`CompanyName`].
    pub fn new(name: impl Into<String>) -> Result<Self, CompanyValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, CompanyValidationError> {
        if name.is_empty() || name.chars().count() > COMPANY_NAME_MAX {
            return Err(CompanyValidationError::InvalidName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CompanyName> for String {
    fn from(value: CompanyName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CompanyName {
    type Error = CompanyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Validated company description. May be empty, never longer than
/// [`DESCRIPTION_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(description: impl Into<String>) -> Result<Self, CompanyValidationError> {
        Self::from_owned(description.into())
    }

    fn from_owned(description: String) -> Result<Self, CompanyValidationError> {
        if description.chars().count() > DESCRIPTION_MAX {
            return Err(CompanyValidationError::InvalidDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = CompanyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Closed set of accepted company types.
///
/// Wire values match the legal categories exactly, including the space in
/// `Sole Proprietorship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CompanyType {
    Corporation,
    NonProfit,
    Cooperative,
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
}

impl CompanyType {
    /// Wire representation of the company type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corporation => "Corporation",
            Self::NonProfit => "NonProfit",
            Self::Cooperative => "Cooperative",
            Self::SoleProprietorship => "Sole Proprietorship",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompanyType {
    type Err = CompanyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Corporation" => Ok(Self::Corporation),
            "NonProfit" => Ok(Self::NonProfit),
            "Cooperative" => Ok(Self::Cooperative),
            "Sole Proprietorship" => Ok(Self::SoleProprietorship),
            _ => Err(CompanyValidationError::InvalidType),
        }
    }
}

/// Unvalidated company payload as decoded from a client request.
///
/// Fields mirror the wire format; absent fields stay `None` (or empty for the
/// name) so the validator can distinguish missing values from invalid ones.
/// Any `id` sent by the client is ignored; identifiers are assigned by the
/// service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyDraft {
    /// Company name, unique across the catalogue.
    #[serde(default)]
    #[schema(example = "Initech")]
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Headcount; required and non-negative.
    #[serde(default)]
    #[schema(example = 120)]
    pub amount_of_employees: Option<i32>,
    /// Whether the company is registered.
    #[serde(default)]
    pub registered: Option<bool>,
    /// Raw company type string, validated against the closed set.
    #[serde(rename = "type", default)]
    #[schema(example = "Corporation")]
    pub company_type: Option<String>,
}

/// Validated company aggregate.
///
/// ## Invariants
/// - `name` is non-empty and at most [`COMPANY_NAME_MAX`] characters.
/// - `amount_of_employees` is non-negative.
/// - `company_type` is a member of [`CompanyType`].
/// - `description`, when present, is at most [`DESCRIPTION_MAX`] characters.
///
/// # Examples
/// ```
/// use company_service::domain::{Company, CompanyDraft};
/// use uuid::Uuid;
///
/// let draft = CompanyDraft {
///     name: "Initech".to_owned(),
///     description: None,
///     amount_of_employees: Some(120),
///     registered: Some(true),
///     company_type: Some("Corporation".to_owned()),
/// };
/// let company = Company::new(Uuid::new_v4(), draft).expect("valid draft");
/// assert_eq!(company.name().as_ref(), "Initech");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "CompanyDto", into = "CompanyDto")]
pub struct Company {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: Uuid,
    #[schema(value_type = String, example = "Initech")]
    name: CompanyName,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    description: Option<Description>,
    #[schema(example = 120)]
    amount_of_employees: i32,
    registered: bool,
    #[serde(rename = "type")]
    company_type: CompanyType,
}

impl Company {
    /// Promote a draft to a validated [`Company`] under the supplied id.
    ///
    /// Checks run in order and stop at the first failure:
    /// name, employee count presence, employee count sign, registered
    /// presence, type presence, type membership, description length.
    pub fn new(id: Uuid, draft: CompanyDraft) -> Result<Self, CompanyValidationError> {
        let name = CompanyName::new(draft.name)?;
        let amount_of_employees = draft
            .amount_of_employees
            .ok_or(CompanyValidationError::MissingEmployeeCount)?;
        if amount_of_employees < 0 {
            return Err(CompanyValidationError::NegativeEmployeeCount);
        }
        let registered = draft
            .registered
            .ok_or(CompanyValidationError::MissingRegistered)?;
        let company_type = draft
            .company_type
            .ok_or(CompanyValidationError::MissingType)?
            .parse::<CompanyType>()?;
        let description = draft.description.map(Description::new).transpose()?;

        Ok(Self {
            id,
            name,
            description,
            amount_of_employees,
            registered,
            company_type,
        })
    }

    /// Stable company identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Unique company name.
    pub fn name(&self) -> &CompanyName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Headcount.
    pub fn amount_of_employees(&self) -> i32 {
        self.amount_of_employees
    }

    /// Registration status.
    pub fn registered(&self) -> bool {
        self.registered
    }

    /// Legal category.
    pub fn company_type(&self) -> CompanyType {
        self.company_type
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
struct CompanyDto {
    id: Uuid,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    amount_of_employees: Option<i32>,
    #[serde(default)]
    registered: Option<bool>,
    #[serde(rename = "type", default)]
    company_type: Option<String>,
}

impl From<Company> for CompanyDto {
    fn from(value: Company) -> Self {
        let Company {
            id,
            name,
            description,
            amount_of_employees,
            registered,
            company_type,
        } = value;
        Self {
            id,
            name: name.into(),
            description: description.map(Into::into),
            amount_of_employees: Some(amount_of_employees),
            registered: Some(registered),
            company_type: Some(company_type.as_str().to_owned()),
        }
    }
}

impl TryFrom<CompanyDto> for Company {
    type Error = CompanyValidationError;

    fn try_from(value: CompanyDto) -> Result<Self, Self::Error> {
        let CompanyDto {
            id,
            name,
            description,
            amount_of_employees,
            registered,
            company_type,
        } = value;

        Company::new(
            id,
            CompanyDraft {
                name,
                description,
                amount_of_employees,
                registered,
                company_type,
            },
        )
    }
}

#[cfg(test)]
mod tests;
