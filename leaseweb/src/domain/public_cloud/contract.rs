use super::enums::{ContractBillingFrequency, ContractState, ContractTerm, ContractType};
use super::DomainError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub billing_frequency: ContractBillingFrequency,
    pub term: ContractTerm,
    pub contract_type: ContractType,
    pub state: ContractState,
    pub ends_at: Option<DateTime<Utc>>,
    pub renewals_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Contract {
    /// Monthly contracts need a term, hourly contracts must not have one
    pub fn new(
        billing_frequency: ContractBillingFrequency,
        term: ContractTerm,
        contract_type: ContractType,
        state: ContractState,
        ends_at: Option<DateTime<Utc>>,
        renewals_at: Option<DateTime<Utc>>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        Self::validate_term(term, contract_type)?;

        Ok(Self {
            billing_frequency,
            term,
            contract_type,
            state,
            ends_at,
            renewals_at,
            created_at,
        })
    }

    pub fn validate_term(term: ContractTerm, contract_type: ContractType) -> Result<(), DomainError> {
        match (contract_type, term) {
            (ContractType::Monthly, ContractTerm::Zero) => Err(DomainError::ContractTermCannotBeZero),
            (ContractType::Hourly, ContractTerm::Zero) => Ok(()),
            (ContractType::Hourly, _) => Err(DomainError::ContractTermMustBeZero),
            (ContractType::Monthly, _) => Ok(()),
        }
    }
}
