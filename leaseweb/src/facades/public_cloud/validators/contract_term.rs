use crate::domain::public_cloud::enums::{ContractTerm, ContractType};
use crate::domain::public_cloud::{Contract, DomainError};
use crate::models::public_cloud::ContractResourceModel;
use async_trait::async_trait;
use tfplug::context::Context;
use tfplug::types::Diagnostics;
use tfplug::validator::{ObjectRequest, ObjectValidator};
use tfplug::value::FromDynamic;

/// Checks that the contract term fits the contract type
pub struct ContractTermValidator;

#[async_trait]
impl ObjectValidator for ContractTermValidator {
    fn description(&self) -> String {
        "term must be 0 for hourly contracts and cannot be 0 for monthly contracts".to_string()
    }

    async fn validate_object(
        &self,
        _ctx: &Context,
        request: &ObjectRequest,
        diagnostics: &mut Diagnostics,
    ) {
        if request.config_value.is_null() || request.config_value.is_unknown() {
            return;
        }

        let contract = match ContractResourceModel::from_dynamic(&request.config_value, &request.path)
        {
            Ok(contract) => contract,
            Err(decode) => {
                diagnostics.extend(decode);
                return;
            }
        };

        let (Some(contract_type), Some(term)) =
            (contract.contract_type.as_known(), contract.term.as_known())
        else {
            return;
        };

        // Unknown tokens are reported by the attribute validators
        let (Ok(contract_type), Ok(term)) =
            (ContractType::parse(contract_type), ContractTerm::parse(*term))
        else {
            return;
        };

        let detail = match Contract::validate_term(term, contract_type) {
            Ok(()) => return,
            Err(DomainError::ContractTermCannotBeZero) => {
                "cannot be 0 when contract.type is Monthly"
            }
            Err(DomainError::ContractTermMustBeZero) => "must be 0 when contract.type is Hourly",
            Err(other) => {
                diagnostics.add_attribute_error(
                    request.path.clone().attribute("term"),
                    "Invalid Contract Term",
                    other.to_string(),
                );
                return;
            }
        };

        diagnostics.add_attribute_error(
            request.path.clone().attribute("term"),
            "Invalid Contract Term",
            detail,
        );
    }
}
