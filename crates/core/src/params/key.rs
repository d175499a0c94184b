// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed parameter keys and the value conversion contract

use super::value::ParameterValue;

/// A typed value that can be stored in a [`ParameterStore`](super::ParameterStore).
///
/// `into_value` returning `None` means "absent": storing it removes the
/// entry instead of keeping a sentinel.
pub trait Parameter: Sized {
    /// Shape this type reads, reported when a stored value does not fit.
    /// Matches [`ParameterValue::kind`] except for range-limited integers.
    const KIND: &'static str;

    fn into_value(self) -> Option<ParameterValue>;

    /// Convert a stored value back, or `None` if its shape does not fit `Self`
    fn from_value(value: &ParameterValue) -> Option<Self>;
}

/// A compile-time key: a unique identifier, a value type and a default.
///
/// Keys are zero-sized tokens. Two key types sharing an identifier address
/// the same slot in a store.
///
/// ```
/// use evtag_core::parameter_key;
///
/// parameter_key! {
///     /// Screen the user came from
///     pub ScreenKey: Option<String> = "screen", default None
/// }
/// ```
pub trait ParameterKey {
    type Value: Parameter;

    /// Identifier used by analytics backends
    const KEY: &'static str;

    /// Value returned when the key has no entry
    fn default_value() -> Self::Value;
}

impl Parameter for String {
    const KIND: &'static str = "text";

    fn into_value(self) -> Option<ParameterValue> {
        Some(ParameterValue::Text(self))
    }

    fn from_value(value: &ParameterValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl Parameter for bool {
    const KIND: &'static str = "bool";

    fn into_value(self) -> Option<ParameterValue> {
        Some(ParameterValue::Bool(self))
    }

    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Parameter for i64 {
    const KIND: &'static str = "integer";

    fn into_value(self) -> Option<ParameterValue> {
        Some(ParameterValue::Integer(self))
    }

    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl Parameter for i32 {
    const KIND: &'static str = "i32";

    fn into_value(self) -> Option<ParameterValue> {
        Some(ParameterValue::Integer(i64::from(self)))
    }

    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Integer(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl Parameter for u32 {
    const KIND: &'static str = "u32";

    fn into_value(self) -> Option<ParameterValue> {
        Some(ParameterValue::Integer(i64::from(self)))
    }

    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Integer(n) => u32::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl Parameter for f64 {
    const KIND: &'static str = "float";

    fn into_value(self) -> Option<ParameterValue> {
        Some(ParameterValue::Float(self))
    }

    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl<T: Parameter> Parameter for Option<T> {
    const KIND: &'static str = T::KIND;

    fn into_value(self) -> Option<ParameterValue> {
        self.and_then(Parameter::into_value)
    }

    fn from_value(value: &ParameterValue) -> Option<Self> {
        T::from_value(value).map(Some)
    }
}

/// Implement [`Parameter`] for a string-backed type via `Display` and `FromStr`.
///
/// Intended for enums whose variants map to fixed backend strings.
#[macro_export]
macro_rules! string_parameter {
    ($ty:ty) => {
        impl $crate::params::Parameter for $ty {
            const KIND: &'static str = "text";

            fn into_value(self) -> Option<$crate::params::ParameterValue> {
                Some($crate::params::ParameterValue::Text(self.to_string()))
            }

            fn from_value(value: &$crate::params::ParameterValue) -> Option<Self> {
                value.as_text().and_then(|s| s.parse().ok())
            }
        }
    };
}

/// Declare a zero-sized [`ParameterKey`].
///
/// `parameter_key!(pub Name: ValueType = "identifier", default expr)`
#[macro_export]
macro_rules! parameter_key {
    ($(#[$meta:meta])* $vis:vis $name:ident: $value:ty = $key:literal, default $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::params::ParameterKey for $name {
            type Value = $value;
            const KEY: &'static str = $key;

            fn default_value() -> $value {
                $default
            }
        }
    };
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
