use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Seller is the zero account or the escrow itself.
    InvalidSeller = 3,
    /// Attached deposit differs from the declared amount.
    AmountMismatch = 4,
    InvalidAmount = 5,
    /// A live booking already uses this id.
    DuplicateBookingId = 6,
    BookingNotFound = 7,
    NotAuthorized = 8,
    CancellationWindowExpired = 9,
    InvalidPeriod = 10,
    InvalidOwner = 11,
}
