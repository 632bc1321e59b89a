//! Asset addressing for the flat ledger namespace.
//!
//! | Asset         | Key                                  |
//! |---------------|--------------------------------------|
//! | Meta          | `meta`                               |
//! | HealthOfficer | `m<officer_id>`                      |
//! | Approval      | `m<officer_id>:<approval_number>`    |
//! | Patient       | `p<patient_number>`                  |
//!
//! `officer_id` is the strkey form of the officer's address. Numbers are
//! decimal without leading zeros. Keys are assembled in a fixed stack buffer
//! so the contract stays allocation free.

use soroban_sdk::{Address, Env, String};

const META: &str = "meta";
const OFFICER_PREFIX: u8 = b'm';
const PATIENT_PREFIX: u8 = b'p';
const APPROVAL_SEPARATOR: u8 = b':';

/// Prefix + muxed strkey (69) + separator + `u32::MAX` digits (10).
const KEY_CAPACITY: usize = 96;

struct KeyBuf {
    bytes: [u8; KEY_CAPACITY],
    len: usize,
}

impl KeyBuf {
    fn new(prefix: u8) -> Self {
        let mut bytes = [0u8; KEY_CAPACITY];
        bytes[0] = prefix;
        Self { bytes, len: 1 }
    }

    fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    fn push_string(&mut self, s: &String) {
        let n = s.len() as usize;
        s.copy_into_slice(&mut self.bytes[self.len..self.len + n]);
        self.len += n;
    }

    fn push_number(&mut self, mut n: u32) {
        let mut digits = [0u8; 10];
        let mut count = 0;
        loop {
            digits[count] = b'0' + (n % 10) as u8;
            count += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in (0..count).rev() {
            self.push(digits[i]);
        }
    }

    fn finish(&self, env: &Env) -> String {
        String::from_bytes(env, &self.bytes[..self.len])
    }
}

/// The identifier an officer's records are addressed by.
pub fn officer_id(officer: &Address) -> String {
    officer.to_string()
}

pub fn meta_key(env: &Env) -> String {
    String::from_str(env, META)
}

pub fn officer_key(env: &Env, officer_id: &String) -> String {
    let mut buf = KeyBuf::new(OFFICER_PREFIX);
    buf.push_string(officer_id);
    buf.finish(env)
}

pub fn approval_key(env: &Env, officer_id: &String, approval_number: u32) -> String {
    let mut buf = KeyBuf::new(OFFICER_PREFIX);
    buf.push_string(officer_id);
    buf.push(APPROVAL_SEPARATOR);
    buf.push_number(approval_number);
    buf.finish(env)
}

/// Also the value recorded in [`crate::Approval::redeemed_by`].
pub fn patient_key(env: &Env, patient_number: u32) -> String {
    let mut buf = KeyBuf::new(PATIENT_PREFIX);
    buf.push_number(patient_number);
    buf.finish(env)
}
