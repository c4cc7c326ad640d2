//! Mutation events emitted after successful company writes.
//!
//! Events are published best-effort once the store has acknowledged the
//! mutation. Create and update events carry the full entity; delete events
//! carry only the identifier, because the entity no longer exists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::company::Company;

/// Action names used to key published events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyAction {
    Create,
    Update,
    Delete,
}

impl CompanyAction {
    /// Wire representation of the action, also used as the routing key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for CompanyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier-only payload carried by delete events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: Uuid,
}

/// Body of a company event: the full entity for create and update, the bare
/// identifier for delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompanyEventBody {
    Full(Company),
    IdOnly(CompanyRef),
}

/// Event describing one committed company mutation.
///
/// # Examples
/// ```
/// use company_service::domain::{CompanyAction, CompanyEvent};
/// use uuid::Uuid;
///
/// let event = CompanyEvent::deleted(Uuid::new_v4());
/// assert_eq!(event.action(), CompanyAction::Delete);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyEvent {
    action: CompanyAction,
    company: CompanyEventBody,
}

impl CompanyEvent {
    /// Event for a freshly created company.
    pub fn created(company: Company) -> Self {
        Self {
            action: CompanyAction::Create,
            company: CompanyEventBody::Full(company),
        }
    }

    /// Event for a replaced company.
    pub fn updated(company: Company) -> Self {
        Self {
            action: CompanyAction::Update,
            company: CompanyEventBody::Full(company),
        }
    }

    /// Event for a removed company. Only the identifier survives deletion.
    pub fn deleted(id: Uuid) -> Self {
        Self {
            action: CompanyAction::Delete,
            company: CompanyEventBody::IdOnly(CompanyRef { id }),
        }
    }

    /// The action that produced this event.
    pub fn action(&self) -> CompanyAction {
        self.action
    }

    /// Identifier of the affected company.
    pub fn company_id(&self) -> Uuid {
        match &self.company {
            CompanyEventBody::Full(company) => company.id(),
            CompanyEventBody::IdOnly(company_ref) => company_ref.id,
        }
    }

    /// The event body.
    pub fn body(&self) -> &CompanyEventBody {
        &self.company
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::CompanyDraft;

    fn sample_company() -> Company {
        Company::new(
            Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid UUID"),
            CompanyDraft {
                name: "Initech".to_owned(),
                description: None,
                amount_of_employees: Some(120),
                registered: Some(true),
                company_type: Some("Corporation".to_owned()),
            },
        )
        .expect("fixture draft is valid")
    }

    #[rstest]
    #[case(CompanyAction::Create, "create")]
    #[case(CompanyAction::Update, "update")]
    #[case(CompanyAction::Delete, "delete")]
    fn action_strings_match_wire(#[case] action: CompanyAction, #[case] expected: &str) {
        assert_eq!(action.as_str(), expected);
        assert_eq!(
            serde_json::to_value(action).expect("action serialises"),
            json!(expected)
        );
    }

    #[rstest]
    fn create_event_carries_full_entity() {
        let company = sample_company();
        let event = CompanyEvent::created(company.clone());

        let value = serde_json::to_value(&event).expect("event serialises");
        assert_eq!(
            value,
            json!({
                "action": "create",
                "company": {
                    "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                    "name": "Initech",
                    "amount_of_employees": 120,
                    "registered": true,
                    "type": "Corporation",
                },
            })
        );
        assert_eq!(event.company_id(), company.id());
    }

    #[rstest]
    fn delete_event_carries_id_only() {
        let id = Uuid::new_v4();
        let event = CompanyEvent::deleted(id);

        let value = serde_json::to_value(&event).expect("event serialises");
        assert_eq!(
            value,
            json!({
                "action": "delete",
                "company": { "id": id.to_string() },
            })
        );
        assert_eq!(event.company_id(), id);
    }

    #[rstest]
    fn events_round_trip() {
        let event = CompanyEvent::updated(sample_company());
        let encoded = serde_json::to_string(&event).expect("event serialises");
        let decoded: CompanyEvent = serde_json::from_str(&encoded).expect("event deserialises");

        assert_eq!(decoded, event);
    }
}
