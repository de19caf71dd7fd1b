use soroban_sdk::{Address, Env, String};

use crate::types::{Booking, DataKey};

/// Bump amount for storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

/// Cancellation window applied until the owner changes it: 30 minutes.
pub const DEFAULT_CANCELLATION_PERIOD: u64 = 30 * 60;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Owner
// =============================================================================

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance(env);
}

// =============================================================================
// Token
// =============================================================================

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance(env);
}

// =============================================================================
// Cancellation period
// =============================================================================

pub fn get_cancellation_period(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CancellationPeriod)
        .unwrap_or(DEFAULT_CANCELLATION_PERIOD)
}

pub fn set_cancellation_period(env: &Env, seconds: u64) {
    env.storage()
        .instance()
        .set(&DataKey::CancellationPeriod, &seconds);
    extend_instance(env);
}

// =============================================================================
// Custody
// =============================================================================

pub fn get_custody(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Custody).unwrap_or(0)
}

pub fn set_custody(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Custody, &amount);
    extend_instance(env);
}

// =============================================================================
// Bookings
// =============================================================================

/// Every hit extends the record's TTL, so a booking that is still being
/// looked at does not archive.
pub fn get_booking(env: &Env, booking_id: &String) -> Option<Booking> {
    let key = DataKey::Booking(booking_id.clone());
    let booking = env.storage().persistent().get(&key)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    Some(booking)
}

pub fn set_booking(env: &Env, booking_id: &String, booking: &Booking) {
    let key = DataKey::Booking(booking_id.clone());
    env.storage().persistent().set(&key, booking);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}
