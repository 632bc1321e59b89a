#![no_std]

pub mod errors;
pub mod events;
pub mod keys;
pub mod storage;
pub mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{DisclosureError, ErrorCategory};
pub use types::{Approval, DailyKey, HealthOfficer, KeySubmission, Meta, Patient, ProfileAccess};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PROFILE_ACCESS: Symbol = symbol_short!("PRF_ACC");

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct KeyDisclosureContract;

#[contractimpl]
impl KeyDisclosureContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the contract with an administrator and create the ledger
    /// `meta` record with a zero patient counter.
    pub fn initialize(env: Env, admin: Address) -> Result<(), DisclosureError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(DisclosureError::AlreadyInitialized);
        }

        admin.require_auth();

        storage::create(&env, &keys::meta_key(&env), &Meta { patient_counter: 0 })?;

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage()
            .instance()
            .set(&PROFILE_ACCESS, &ProfileAccess::Open);
        env.storage()
            .instance()
            .extend_ttl(storage::TTL_THRESHOLD, storage::TTL_EXTEND_TO);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, DisclosureError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(DisclosureError::NotInitialized)
    }

    /// Set who may read officer profiles. Admin only.
    pub fn set_profile_access(
        env: Env,
        caller: Address,
        access: ProfileAccess,
    ) -> Result<(), DisclosureError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&PROFILE_ACCESS, &access);
        events::publish_profile_access_set(&env, access);

        Ok(())
    }

    pub fn get_profile_access(env: Env) -> ProfileAccess {
        env.storage()
            .instance()
            .get(&PROFILE_ACCESS)
            .unwrap_or(ProfileAccess::Open)
    }

    // ── Officers & approvals ─────────────────────────────────────────────────

    /// Register the calling officer. Registering twice is a no-op.
    pub fn register_officer(env: Env, officer: Address) -> Result<(), DisclosureError> {
        officer.require_auth();

        let officer_key = keys::officer_key(&env, &keys::officer_id(&officer));
        if storage::exists(&env, &officer_key) {
            return Ok(());
        }

        let record = HealthOfficer {
            officer_id: officer.clone(),
            approval_counter: 0,
        };
        storage::create(&env, &officer_key, &record)?;

        events::publish_officer_registered(&env, officer);

        Ok(())
    }

    /// Issue a new approval carrying `token_id` under the next approval
    /// number for this officer.
    ///
    /// An unregistered officer is ignored: the call succeeds without writing
    /// anything.
    pub fn issue_approval_token(
        env: Env,
        officer: Address,
        token_id: String,
    ) -> Result<(), DisclosureError> {
        officer.require_auth();

        let id = keys::officer_id(&officer);
        let officer_key = keys::officer_key(&env, &id);
        if !storage::exists(&env, &officer_key) {
            events::publish_issue_skipped(&env, officer);
            return Ok(());
        }

        let mut record: HealthOfficer = storage::read(&env, &officer_key)?;
        record.approval_counter = record
            .approval_counter
            .checked_add(1)
            .ok_or(DisclosureError::CounterOverflow)?;
        storage::update(&env, &officer_key, &record)?;

        let approval = Approval {
            token_id,
            redeemed_by: None,
        };
        storage::create(
            &env,
            &keys::approval_key(&env, &id, record.approval_counter),
            &approval,
        )?;

        events::publish_approval_issued(&env, officer, record.approval_counter);

        Ok(())
    }

    // ── Redemption ───────────────────────────────────────────────────────────

    /// Redeem an approval and publish the patient's daily keys.
    ///
    /// Approvals are scanned from the most recently issued down to the first;
    /// the first unredeemed one carrying the submitted token is consumed. When
    /// nothing matches the call succeeds and no state changes. Callers are
    /// expected to have run [`Self::validate_token`] first.
    pub fn redeem_approval(env: Env, submission: KeySubmission) -> Result<(), DisclosureError> {
        let meta_key = keys::meta_key(&env);
        let mut meta: Meta = storage::read(&env, &meta_key)?;

        let id = keys::officer_id(&submission.officer_id);
        let officer: HealthOfficer = storage::read(&env, &keys::officer_key(&env, &id))?;

        let mut matched = None;
        for number in (1..=officer.approval_counter).rev() {
            let approval_key = keys::approval_key(&env, &id, number);
            let approval: Approval = storage::read(&env, &approval_key)?;
            if approval.redeemed_by.is_none() && approval.token_id == submission.token_id {
                matched = Some((number, approval_key, approval));
                break;
            }
        }

        let Some((approval_number, approval_key, mut approval)) = matched else {
            events::publish_redemption_unmatched(&env, submission.officer_id);
            return Ok(());
        };

        let patient_number = meta
            .patient_counter
            .checked_add(1)
            .ok_or(DisclosureError::CounterOverflow)?;
        let patient_key = keys::patient_key(&env, patient_number);

        approval.redeemed_by = Some(patient_key.clone());
        storage::update(&env, &approval_key, &approval)?;

        let patient = Patient {
            officer_id: submission.officer_id.clone(),
            token_id: submission.token_id,
            daily_keys: submission.daily_keys,
        };
        storage::create(&env, &patient_key, &patient)?;

        meta.patient_counter = patient_number;
        storage::update(&env, &meta_key, &meta)?;

        events::publish_approval_redeemed(
            &env,
            submission.officer_id,
            approval_number,
            patient_number,
        );

        Ok(())
    }

    /// Check that `token_id` is an unredeemed approval of `officer`.
    ///
    /// Scans approvals in issue order and never writes.
    pub fn validate_token(
        env: Env,
        officer: Address,
        token_id: String,
    ) -> Result<(), DisclosureError> {
        let id = keys::officer_id(&officer);
        let officer_key = keys::officer_key(&env, &id);
        if !storage::exists(&env, &officer_key) {
            return Err(DisclosureError::InvalidOfficer);
        }

        let record: HealthOfficer = storage::read(&env, &officer_key)?;
        for number in 1..=record.approval_counter {
            let approval: Approval = storage::read(&env, &keys::approval_key(&env, &id, number))?;
            if approval.redeemed_by.is_none() && approval.token_id == token_id {
                return Ok(());
            }
        }

        Err(DisclosureError::InvalidToken)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Look up an officer profile on behalf of `caller`.
    ///
    /// Returns `None` when the officer is unknown, or when the profile access
    /// policy is [`ProfileAccess::OwnerOnly`] and `caller` is someone else.
    pub fn fetch_officer_profile(
        env: Env,
        officer: Address,
        caller: Address,
    ) -> Option<HealthOfficer> {
        if Self::get_profile_access(env.clone()) == ProfileAccess::OwnerOnly {
            caller.require_auth();
            if caller != officer {
                return None;
            }
        }

        let officer_key = keys::officer_key(&env, &keys::officer_id(&officer));
        storage::read(&env, &officer_key).ok()
    }

    /// Concatenate every patient's daily keys in patient-number order.
    pub fn aggregate_keys(env: Env) -> Result<Vec<DailyKey>, DisclosureError> {
        let meta: Meta = storage::read(&env, &keys::meta_key(&env))?;

        let mut aggregated = Vec::new(&env);
        for number in 1..=meta.patient_counter {
            let patient_key = keys::patient_key(&env, number);
            if !storage::exists(&env, &patient_key) {
                continue;
            }
            let patient: Patient = storage::read(&env, &patient_key)?;
            aggregated.append(&patient.daily_keys);
        }

        Ok(aggregated)
    }

    pub fn get_meta(env: Env) -> Result<Meta, DisclosureError> {
        storage::read(&env, &keys::meta_key(&env))
    }

    pub fn get_officer(env: Env, officer: Address) -> Result<HealthOfficer, DisclosureError> {
        storage::read(&env, &keys::officer_key(&env, &keys::officer_id(&officer)))
    }

    pub fn get_approval(
        env: Env,
        officer: Address,
        approval_number: u32,
    ) -> Result<Approval, DisclosureError> {
        let id = keys::officer_id(&officer);
        storage::read(&env, &keys::approval_key(&env, &id, approval_number))
    }

    pub fn get_patient(env: Env, patient_number: u32) -> Result<Patient, DisclosureError> {
        storage::read(&env, &keys::patient_key(&env, patient_number))
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), DisclosureError> {
        let admin = Self::get_admin(env.clone())?;
        if *caller != admin {
            return Err(DisclosureError::Unauthorized);
        }
        Ok(())
    }
}
