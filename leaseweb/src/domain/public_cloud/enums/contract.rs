string_enum! {
    pub enum ContractType {
        Hourly => "HOURLY",
        Monthly => "MONTHLY",
    }
}

int_enum! {
    /// Contract term in months
    pub enum ContractTerm {
        Zero => 0,
        One => 1,
        Three => 3,
        Six => 6,
        Twelve => 12,
    }
}

int_enum! {
    /// Billing frequency in months
    pub enum ContractBillingFrequency {
        Zero => 0,
        One => 1,
        Three => 3,
        Six => 6,
        Twelve => 12,
    }
}

string_enum! {
    pub enum ContractState {
        Active => "ACTIVE",
        DeleteScheduled => "DELETE_SCHEDULED",
    }
}
