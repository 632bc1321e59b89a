//! Property-based tests for key aggregation.
//!
//! Invariant tested:
//! - `aggregate_keys` is the concatenation of every patient's keys in
//!   patient-number order

use key_disclosure::{DailyKey, KeyDisclosureContract, KeyDisclosureContractClient, KeySubmission};
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

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_aggregate_is_patient_ordered_concatenation(
        batches in prop::collection::vec(prop::collection::vec(any::<u32>(), 0..4), 0..6),
    ) {
        let (env, client) = setup();
        let officer = Address::generate(&env);
        client.register_officer(&officer);

        let mut expected = Vec::new(&env);
        for (i, intervals) in batches.iter().enumerate() {
            let token_id = String::from_str(&env, &std::format!("A{i}"));
            client.issue_approval_token(&officer, &token_id);

            let mut daily_keys = Vec::new(&env);
            for interval in intervals {
                let key = DailyKey {
                    hex_key: String::from_str(&env, &std::format!("{interval:08x}")),
                    interval: *interval,
                };
                daily_keys.push_back(key.clone());
                expected.push_back(key);
            }

            client.redeem_approval(&KeySubmission {
                officer_id: officer.clone(),
                token_id,
                daily_keys,
            });
        }

        prop_assert_eq!(client.get_meta().patient_counter, batches.len() as u32);
        prop_assert_eq!(client.aggregate_keys(), expected);
    }
}
