use soroban_sdk::contracterror;

/// Error categories for classifying contract failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Lifecycle errors: initialisation ordering
    Lifecycle = 1,
    /// Authorization errors: caller is not allowed to perform the call
    Authorization = 2,
    /// Storage errors: primitive invariant violated on a key
    Storage = 3,
    /// Validation errors: token pre-check failed
    Validation = 4,
    /// Arithmetic errors: a ledger counter cannot advance
    Arithmetic = 5,
}

/// Errors surfaced by the key disclosure contract.
///
/// Any `Err` aborts the invocation and the host discards every write made
/// during it, so counters and records can never be left half-updated.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum DisclosureError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    /// `create` on an occupied key.
    AlreadyExists = 4,
    /// `read`, `update` or `delete` on a missing key.
    NotFound = 5,
    /// Officer lookup miss during token validation.
    InvalidOfficer = 6,
    /// No unredeemed approval carries the token.
    InvalidToken = 7,
    CounterOverflow = 8,
}

impl DisclosureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DisclosureError::NotInitialized | DisclosureError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            DisclosureError::Unauthorized => ErrorCategory::Authorization,
            DisclosureError::AlreadyExists | DisclosureError::NotFound => ErrorCategory::Storage,
            DisclosureError::InvalidOfficer | DisclosureError::InvalidToken => {
                ErrorCategory::Validation
            }
            DisclosureError::CounterOverflow => ErrorCategory::Arithmetic,
        }
    }

    /// Returns a human-readable message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            DisclosureError::NotInitialized => "Contract has not been initialized",
            DisclosureError::AlreadyInitialized => "Contract is already initialized",
            DisclosureError::Unauthorized => "Caller is not authorized for this operation",
            DisclosureError::AlreadyExists => "An asset already exists at this key",
            DisclosureError::NotFound => "No asset exists at this key",
            DisclosureError::InvalidOfficer => "Health officer is not registered",
            DisclosureError::InvalidToken => "No unredeemed approval matches this token",
            DisclosureError::CounterOverflow => "Ledger counter cannot be incremented",
        }
    }
}
