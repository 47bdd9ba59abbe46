// Factory error module for Shroud

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    /// Caller is neither governance nor the registered operator
    Unauthorized = 3,

    /// Denominations must be strictly positive
    InvalidDenomination = 4,

    /// No implementation uploaded for the requested instance kind
    MissingImplementation = 5,
}
