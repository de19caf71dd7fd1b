use soroban_sdk::{contracttype, Address, String};

/// A single escrowed booking.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    /// Party that deposited the funds and may reclaim them.
    pub buyer: Address,
    /// Counterparty the booking was made with.
    pub seller: Address,
    /// Token base units held for this booking.
    pub amount: i128,
    /// Ledger timestamp at creation, in seconds.
    pub created_at: u64,
    /// false once the buyer has cancelled.
    pub exists: bool,
}

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Administrative address (instance storage).
    Owner,
    /// Custody token address (instance storage).
    Token,
    /// Cancellation window in seconds (instance storage).
    CancellationPeriod,
    /// Total held on behalf of live bookings (instance storage).
    Custody,
    /// Booking record by caller-chosen id (persistent storage).
    Booking(String),
}
