//! Storage primitives over the contract's persistent namespace.
//!
//! Every asset kind goes through these five calls, which enforce that a
//! create never overwrites and that a read, update or delete always targets
//! an existing record.

use soroban_sdk::{Env, IntoVal, String, TryFromVal, Val};

use crate::errors::DisclosureError;

/// TTL constants for persistent storage (in ledgers)
pub const TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

fn write<V>(env: &Env, key: &String, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn exists(env: &Env, key: &String) -> bool {
    env.storage().persistent().has(key)
}

pub fn create<V>(env: &Env, key: &String, value: &V) -> Result<(), DisclosureError>
where
    V: IntoVal<Env, Val>,
{
    if exists(env, key) {
        return Err(DisclosureError::AlreadyExists);
    }
    write(env, key, value);
    Ok(())
}

pub fn read<V>(env: &Env, key: &String) -> Result<V, DisclosureError>
where
    V: TryFromVal<Env, Val>,
{
    env.storage()
        .persistent()
        .get(key)
        .ok_or(DisclosureError::NotFound)
}

pub fn update<V>(env: &Env, key: &String, value: &V) -> Result<(), DisclosureError>
where
    V: IntoVal<Env, Val>,
{
    if !exists(env, key) {
        return Err(DisclosureError::NotFound);
    }
    write(env, key, value);
    Ok(())
}

pub fn delete(env: &Env, key: &String) -> Result<(), DisclosureError> {
    if !exists(env, key) {
        return Err(DisclosureError::NotFound);
    }
    env.storage().persistent().remove(key);
    Ok(())
}
