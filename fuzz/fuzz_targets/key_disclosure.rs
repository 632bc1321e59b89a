#![no_main]

use arbitrary::Arbitrary;
use key_disclosure::{
    DailyKey, KeyDisclosureContract, KeyDisclosureContractClient, KeySubmission,
};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String, Vec};

const OFFICERS: usize = 3;
const TOKENS: u8 = 4;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Register { officer: u8 },
    Issue { officer: u8, token: u8 },
    Redeem { officer: u8, token: u8, keys: u8 },
    Validate { officer: u8, token: u8 },
    Aggregate,
}

fn token(env: &Env, n: u8) -> String {
    String::from_str(env, &format!("T{}", n % TOKENS))
}

fuzz_target!(|actions: std::vec::Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(KeyDisclosureContract, ());
    let client = KeyDisclosureContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env));

    let officers: std::vec::Vec<Address> =
        (0..OFFICERS).map(|_| Address::generate(&env)).collect();
    let mut registered = [false; OFFICERS];
    let mut issued = [0u32; OFFICERS];
    let mut disclosed = 0u32;

    for action in actions {
        match action {
            FuzzAction::Register { officer } => {
                let idx = officer as usize % OFFICERS;
                client.register_officer(&officers[idx]);
                registered[idx] = true;
            }
            FuzzAction::Issue { officer, token: t } => {
                let idx = officer as usize % OFFICERS;
                client.issue_approval_token(&officers[idx], &token(&env, t));
                if registered[idx] {
                    issued[idx] += 1;
                }
            }
            FuzzAction::Redeem {
                officer,
                token: t,
                keys,
            } => {
                let idx = officer as usize % OFFICERS;
                let mut daily_keys = Vec::new(&env);
                for i in 0..(keys % 4) {
                    daily_keys.push_back(DailyKey {
                        hex_key: String::from_str(&env, "00ff"),
                        interval: u32::from(i),
                    });
                }
                let before = client.get_meta().patient_counter;
                let result = client.try_redeem_approval(&KeySubmission {
                    officer_id: officers[idx].clone(),
                    token_id: token(&env, t),
                    daily_keys: daily_keys.clone(),
                });
                // Only an unregistered officer may make redemption fail.
                assert_eq!(result.is_err(), !registered[idx]);

                let after = client.get_meta().patient_counter;
                if after != before {
                    assert_eq!(after, before + 1);
                    assert_eq!(client.get_patient(&after).daily_keys, daily_keys);
                    disclosed += daily_keys.len();
                }
            }
            FuzzAction::Validate { officer, token: t } => {
                let idx = officer as usize % OFFICERS;
                let _ = client.try_validate_token(&officers[idx], &token(&env, t));
            }
            FuzzAction::Aggregate => {
                assert_eq!(client.aggregate_keys().len(), disclosed);
            }
        }
    }

    let mut total_issued = 0u32;
    for (idx, officer) in officers.iter().enumerate() {
        if registered[idx] {
            assert_eq!(client.get_officer(officer).approval_counter, issued[idx]);
            total_issued += issued[idx];
        }
    }
    assert!(client.get_meta().patient_counter <= total_issued);
});
