use soroban_sdk::{symbol_short, Address, Env};

use crate::types::ProfileAccess;

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("DSC_INIT"),), admin);
}

pub fn publish_officer_registered(env: &Env, officer: Address) {
    env.events().publish((symbol_short!("OFF_REG"),), officer);
}

pub fn publish_approval_issued(env: &Env, officer: Address, approval_number: u32) {
    env.events()
        .publish((symbol_short!("APR_ISS"), officer), approval_number);
}

/// Issuance for an unregistered officer was dropped.
pub fn publish_issue_skipped(env: &Env, officer: Address) {
    env.events().publish((symbol_short!("ISS_SKIP"),), officer);
}

pub fn publish_approval_redeemed(
    env: &Env,
    officer: Address,
    approval_number: u32,
    patient_number: u32,
) {
    env.events().publish(
        (symbol_short!("APR_RDM"), officer),
        (approval_number, patient_number),
    );
}

/// Redemption scanned every approval without a match.
pub fn publish_redemption_unmatched(env: &Env, officer: Address) {
    env.events().publish((symbol_short!("RDM_MISS"),), officer);
}

pub fn publish_profile_access_set(env: &Env, access: ProfileAccess) {
    env.events().publish((symbol_short!("PRF_ACC"),), access);
}
