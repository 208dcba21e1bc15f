use thiserror::Error;

/// Failure raised by an adapter operation.
///
/// Returning `Err` from a capability method is the adapter equivalent of a
/// thrown fault: facades abort the current orchestration pass when they see
/// one. A completed call that merely reports a non-success status must use
/// the domain status type instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Native call rejected: {0}")]
    Rejected(String),

    #[error("Native completion handle dropped before the call finished")]
    CallbackDropped,

    #[error("Payload decoding failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
