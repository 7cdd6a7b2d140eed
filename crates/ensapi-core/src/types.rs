//! # Validated Input Newtypes
//!
//! Values that have passed a schema in [`crate::params`]. Construction is
//! crate-private so a handler holding an `Address` knows it is lowercase
//! `0x` + 40 hex characters.

use std::fmt;

use serde::Serialize;

/// An ENS name: non-empty and containing at least one `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EnsName(String);

/// An EVM address, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

/// A chain identifier as a string of decimal digits.
///
/// Kept as text: any digit string is accepted, including values wider than
/// a machine integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChainId(String);

/// A coin type naming the address format requested in a selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CoinType(String);

macro_rules! string_newtype {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub(crate) fn new_unchecked(value: String) -> Self {
                    Self(value)
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )*
    };
}

string_newtype!(EnsName, Address, ChainId, CoinType);
