// Proposal creator error module for Shroud

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CreatorError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    /// A protocol fee above 100% (10000 bps) was requested
    ProtocolFeeTooHigh = 3,

    /// Denomination and protocol fee lists must be equal-length and non-empty
    ArityMismatch = 4,

    /// No exchange pool exists for (token, base asset, fee tier)
    PoolNotFound = 5,

    /// The exchange pool's observation buffer is below the configured minimum
    InsufficientObservationHistory = 6,
}
