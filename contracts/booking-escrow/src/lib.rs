#![no_std]

mod errors;
mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, String};

pub use errors::Error;
pub use storage::DEFAULT_CANCELLATION_PERIOD;
pub use types::Booking;

/// Strkey of the all-zero ed25519 account.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// The zero account and the escrow's own address never name a real party.
fn is_null_identity(env: &Env, address: &Address) -> bool {
    *address == env.current_contract_address()
        || *address == Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let owner = storage::get_owner(env).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::NotAuthorized);
    }
    Ok(owner)
}

#[contract]
pub struct BookingEscrow;

#[contractimpl]
impl BookingEscrow {
    /// One-time initializer. Binds the custody token and makes `owner` the
    /// administrator, with the default 30 minute cancellation window.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        owner.require_auth();
        if storage::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        storage::set_cancellation_period(&env, DEFAULT_CANCELLATION_PERIOD);
        storage::set_custody(&env, 0);

        events::initialized(&env, &owner, &token, DEFAULT_CANCELLATION_PERIOD);
        Ok(())
    }

    /// Escrow `deposit` from `buyer` under `booking_id`.
    ///
    /// `amount` is the declared booking value and must equal the attached
    /// `deposit` exactly. The id must not belong to a live booking; a
    /// cancelled id may be booked again.
    pub fn book(
        env: Env,
        buyer: Address,
        seller: Address,
        amount: i128,
        booking_id: String,
        deposit: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let token_addr = storage::get_token(&env).ok_or(Error::NotInitialized)?;

        if is_null_identity(&env, &seller) {
            return Err(Error::InvalidSeller);
        }
        if deposit != amount {
            return Err(Error::AmountMismatch);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if let Some(existing) = storage::get_booking(&env, &booking_id) {
            if existing.exists {
                return Err(Error::DuplicateBookingId);
            }
        }

        let booking = Booking {
            buyer: buyer.clone(),
            seller: seller.clone(),
            amount,
            created_at: env.ledger().timestamp(),
            exists: true,
        };
        storage::set_booking(&env, &booking_id, &booking);
        storage::set_custody(&env, storage::get_custody(&env) + amount);

        let token = token::Client::new(&env, &token_addr);
        token.transfer(&buyer, &env.current_contract_address(), &deposit);

        events::booked(&env, &booking_id, &buyer, &seller, amount);
        log!(&env, "booked {}: {} held from {}", booking_id, amount, buyer);
        Ok(())
    }

    /// Buyer reclaims the escrowed amount while the cancellation window is
    /// open. The window is measured with the period in force now, not the
    /// one in force when the booking was made. Returns the refunded amount.
    pub fn cancel_booking(env: Env, caller: Address, booking_id: String) -> Result<i128, Error> {
        caller.require_auth();
        let token_addr = storage::get_token(&env).ok_or(Error::NotInitialized)?;

        let mut booking = match storage::get_booking(&env, &booking_id) {
            Some(b) if b.exists => b,
            _ => return Err(Error::BookingNotFound),
        };
        if caller != booking.buyer {
            return Err(Error::NotAuthorized);
        }

        let period = storage::get_cancellation_period(&env);
        let elapsed = env.ledger().timestamp().saturating_sub(booking.created_at);
        if elapsed > period {
            return Err(Error::CancellationWindowExpired);
        }

        let amount = booking.amount;
        booking.exists = false;
        storage::set_booking(&env, &booking_id, &booking);
        storage::set_custody(&env, storage::get_custody(&env) - amount);

        let token = token::Client::new(&env, &token_addr);
        token.transfer(&env.current_contract_address(), &booking.buyer, &amount);

        events::cancelled(&env, &booking_id, &booking.buyer, amount);
        log!(&env, "cancelled {} after {}s, refunded {}", booking_id, elapsed, amount);
        Ok(amount)
    }

    /// Owner-only. Applies to every later window check, live bookings included.
    pub fn set_cancellation_period(env: Env, caller: Address, seconds: u64) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if seconds == 0 {
            return Err(Error::InvalidPeriod);
        }

        let old = storage::get_cancellation_period(&env);
        storage::set_cancellation_period(&env, seconds);

        events::period_changed(&env, old, seconds);
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Owner-only.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let owner = require_owner(&env, &caller)?;
        if is_null_identity(&env, &new_owner) {
            return Err(Error::InvalidOwner);
        }

        storage::set_owner(&env, &new_owner);

        events::owner_changed(&env, &owner, &new_owner);
        Ok(())
    }

    /// Replace the contract code, keeping every stored booking and setting.
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        storage::extend_instance(&env);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    /// Live or cancelled record under `booking_id`; None if never booked.
    pub fn get_booking(env: Env, booking_id: String) -> Option<Booking> {
        storage::get_booking(&env, &booking_id)
    }

    pub fn get_cancellation_period(env: Env) -> u64 {
        storage::get_cancellation_period(&env)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    pub fn get_token(env: Env) -> Option<Address> {
        storage::get_token(&env)
    }

    /// Total held on behalf of live bookings.
    pub fn custody_balance(env: Env) -> i128 {
        storage::get_custody(&env)
    }

    /// Last timestamp at which the buyer may still cancel, under the
    /// current period. None unless the booking is live.
    pub fn cancellation_deadline(env: Env, booking_id: String) -> Option<u64> {
        let booking = storage::get_booking(&env, &booking_id)?;
        if !booking.exists {
            return None;
        }
        Some(
            booking
                .created_at
                .saturating_add(storage::get_cancellation_period(&env)),
        )
    }
}
