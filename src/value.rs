use std::any::{type_name, TypeId};

use crate::cache::CachedValue;
use crate::errors::{ArgError, Result};

/// A type that can be read from a value token and memoized.
pub trait FromToken: Sized {
    /// Convert the token that follows a key.
    fn parse_token(token: &str) -> Result<Self>;

    /// Recover a value of this type from the cache, or `None` if the entry
    /// was stored as a different type.
    fn from_cached(value: &CachedValue) -> Option<Self>;

    fn to_cached(&self) -> CachedValue;
}

impl FromToken for String {
    fn parse_token(token: &str) -> Result<Self> {
        Ok(token.to_string())
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn to_cached(&self) -> CachedValue {
        CachedValue::String(self.clone())
    }
}

impl FromToken for i64 {
    fn parse_token(token: &str) -> Result<Self> {
        token.trim().parse().map_err(|_| ArgError::InvalidNumber {
            kind: "int",
            token: token.to_string(),
        })
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn to_cached(&self) -> CachedValue {
        CachedValue::Int(*self)
    }
}

impl FromToken for f64 {
    fn parse_token(token: &str) -> Result<Self> {
        token.trim().parse().map_err(|_| ArgError::InvalidNumber {
            kind: "float",
            token: token.to_string(),
        })
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn to_cached(&self) -> CachedValue {
        CachedValue::Float(*self)
    }
}

impl FromToken for bool {
    /// Integers map to `n != 0`; any other text is true unless it reads `false`.
    fn parse_token(token: &str) -> Result<Self> {
        if let Ok(n) = token.trim().parse::<i64>() {
            return Ok(n != 0);
        }
        Ok(!token.eq_ignore_ascii_case("false"))
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn to_cached(&self) -> CachedValue {
        CachedValue::Bool(*self)
    }
}

/// An enum that can be named in argument text.
///
/// Plain enums get this from [`token_enum!`](crate::token_enum). Flag sets
/// implement it by hand so that `from_bits` accepts combined values, which
/// lets a token like `"Apple, Kiwi"` resolve.
pub trait TokenEnum: Copy + 'static {
    /// Name and numeric value of each variant.
    fn variants() -> &'static [(&'static str, i64)];

    fn to_bits(self) -> i64;

    fn from_bits(bits: i64) -> Option<Self>;
}

/// Parse a comma-separated list of variant names (or decimal values),
/// OR-ing them together.
pub fn parse_enum<T: TokenEnum>(token: &str) -> Result<T> {
    let mut bits = 0_i64;
    for part in token.split(',') {
        let name = part.trim();
        bits |= match name.parse::<i64>() {
            Ok(n) => n,
            Err(_) => T::variants()
                .iter()
                .find(|(v, _)| v.eq_ignore_ascii_case(name))
                .map(|(_, b)| *b)
                .ok_or_else(|| ArgError::UnknownVariant {
                    name: name.to_string(),
                    type_name: type_name::<T>(),
                })?,
        };
    }
    T::from_bits(bits).ok_or(ArgError::UnrepresentableBits {
        bits,
        type_name: type_name::<T>(),
    })
}

/// Adapter giving every [`TokenEnum`] a [`FromToken`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue<T>(pub T);

impl<T: TokenEnum> FromToken for EnumValue<T> {
    fn parse_token(token: &str) -> Result<Self> {
        parse_enum(token).map(EnumValue)
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Enum { type_id, bits } if *type_id == TypeId::of::<T>() => {
                T::from_bits(*bits).map(EnumValue)
            }
            _ => None,
        }
    }

    fn to_cached(&self) -> CachedValue {
        CachedValue::Enum {
            type_id: TypeId::of::<T>(),
            bits: self.0.to_bits(),
        }
    }
}

/// Implement [`TokenEnum`] for a field-less `Copy` enum, using the variant
/// identifiers as names and their discriminants as values.
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Mode { Fast = 1, Safe = 2 }
/// argtext::token_enum!(Mode { Fast, Safe });
///
/// let mode: Mode = argtext::value::parse_enum("safe").unwrap();
/// assert_eq!(mode, Mode::Safe);
/// ```
#[macro_export]
macro_rules! token_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::TokenEnum for $ty {
            fn variants() -> &'static [(&'static str, i64)] {
                const VARIANTS: &[(&str, i64)] = &[$((stringify!($variant), $ty::$variant as i64)),+];
                VARIANTS
            }

            fn to_bits(self) -> i64 {
                self as i64
            }

            fn from_bits(bits: i64) -> Option<Self> {
                $(
                    if bits == $ty::$variant as i64 {
                        return Some($ty::$variant);
                    }
                )+
                None
            }
        }
    };
}
