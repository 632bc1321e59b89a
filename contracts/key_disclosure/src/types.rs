use soroban_sdk::{contracttype, Address, String, Vec};

/// Ledger-wide bookkeeping stored under `"meta"`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Meta {
    /// Number of patient records ever created.
    pub patient_counter: u32,
}

/// A registered health officer, stored under `"m" + officer_id`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthOfficer {
    pub officer_id: Address,
    /// Number of approval tokens this officer has issued.
    pub approval_counter: u32,
}

/// A single-use approval, stored under `"m" + officer_id + ":" + number`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approval {
    pub token_id: String,
    /// Patient key (`"p" + number`) once redeemed.
    pub redeemed_by: Option<String>,
}

/// A daily exposure key together with the interval it covers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyKey {
    pub hex_key: String,
    pub interval: u32,
}

/// A diagnosed patient's disclosure, stored under `"p" + number`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub officer_id: Address,
    pub token_id: String,
    pub daily_keys: Vec<DailyKey>,
}

/// Input for [`crate::KeyDisclosureContract::redeem_approval`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeySubmission {
    pub officer_id: Address,
    pub token_id: String,
    pub daily_keys: Vec<DailyKey>,
}

/// Who may read an officer profile.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProfileAccess {
    /// Any caller may read any profile.
    Open,
    /// Only the officer may read their own profile.
    OwnerOnly,
}
