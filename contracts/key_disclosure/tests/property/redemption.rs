//! Model-based property tests for redemption and validation.
//!
//! A plain list of `(token, redeemed_by)` pairs models the officer's
//! approvals. Every redemption in the model consumes the highest numbered
//! unredeemed approval with a matching token, and the contract must agree
//! with the model after any sequence of attempts.

use key_disclosure::{
    DisclosureError, KeyDisclosureContract, KeyDisclosureContractClient, KeySubmission,
};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String, Vec};

fn setup() -> (Env, KeyDisclosureContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(KeyDisclosureContract, ());
    let client = KeyDisclosureContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env));

    (env, client)
}

fn token(env: &Env, n: u8) -> String {
    String::from_str(env, &std::format!("T{n}"))
}

fn patient_key(env: &Env, n: u32) -> String {
    String::from_str(env, &std::format!("p{n}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The contract matches the most-recent-unredeemed model for any mix of
    /// issued tokens and redemption attempts.
    #[test]
    fn prop_redemption_matches_model(
        issued in prop::collection::vec(0u8..4, 0..10),
        attempts in prop::collection::vec(0u8..5, 0..10),
    ) {
        let (env, client) = setup();
        let officer = Address::generate(&env);
        client.register_officer(&officer);
        for t in &issued {
            client.issue_approval_token(&officer, &token(&env, *t));
        }

        let mut model: std::vec::Vec<(u8, Option<u32>)> =
            issued.iter().map(|t| (*t, None)).collect();
        let mut patients = 0u32;

        for t in &attempts {
            client.redeem_approval(&KeySubmission {
                officer_id: officer.clone(),
                token_id: token(&env, *t),
                daily_keys: Vec::new(&env),
            });

            if let Some(slot) = model
                .iter_mut()
                .rev()
                .find(|(tok, redeemed)| tok == t && redeemed.is_none())
            {
                patients += 1;
                slot.1 = Some(patients);
            }
        }

        prop_assert_eq!(client.get_meta().patient_counter, patients);
        for (i, (_, redeemed)) in model.iter().enumerate() {
            let approval = client.get_approval(&officer, &(i as u32 + 1));
            prop_assert_eq!(approval.redeemed_by, redeemed.map(|n| patient_key(&env, n)));
        }
    }

    /// Validation succeeds exactly when an unredeemed approval carries the token.
    #[test]
    fn prop_validate_agrees_with_state(
        issued in prop::collection::vec(0u8..4, 0..8),
        redeemed in prop::collection::vec(0u8..4, 0..4),
        probe in 0u8..5,
    ) {
        let (env, client) = setup();
        let officer = Address::generate(&env);
        client.register_officer(&officer);
        for t in &issued {
            client.issue_approval_token(&officer, &token(&env, *t));
        }
        for t in &redeemed {
            client.redeem_approval(&KeySubmission {
                officer_id: officer.clone(),
                token_id: token(&env, *t),
                daily_keys: Vec::new(&env),
            });
        }

        let counter_before = client.get_meta().patient_counter;
        let available = (1..=issued.len() as u32).any(|n| {
            let approval = client.get_approval(&officer, &n);
            approval.redeemed_by.is_none() && approval.token_id == token(&env, probe)
        });

        let result = client.try_validate_token(&officer, &token(&env, probe));
        if available {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(Ok(DisclosureError::InvalidToken)));
        }
        prop_assert_eq!(client.get_meta().patient_counter, counter_before);
    }
}
