use thiserror::Error;

/// Errors produced while loading text or converting a token into a typed value.
///
/// Lookups never surface these to the caller; they resolve to the caller's
/// default instead. Only loading from disk propagates an error.
#[derive(Debug, Error)]
pub enum ArgError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid {kind} literal: {token:?}")]
    InvalidNumber { kind: &'static str, token: String },

    #[error("unknown enum literal {name:?} for {type_name}")]
    UnknownVariant { name: String, type_name: &'static str },

    #[error("value {bits} is not representable by {type_name}")]
    UnrepresentableBits { bits: i64, type_name: &'static str },
}

pub type Result<T> = std::result::Result<T, ArgError>;
