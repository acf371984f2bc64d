use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::field::FieldValue;

/// A fixed association of integer codes to display names.
///
/// Tables are compiled in; there is no dynamic update path. Codes are
/// expected to be unique and assigned from 1 upward (the standards doctor
/// verifies this for the shipped tables).
pub trait NameTable {
    fn entries() -> &'static [(u32, &'static str)];

    fn name(code: u32) -> Option<&'static str> {
        Self::entries()
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, name)| *name)
    }

    /// Render the table as `code. name` lines for use inside a prompt.
    fn menu() -> String {
        Self::entries()
            .iter()
            .map(|(code, name)| format!("  {code}. {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An integer code paired with a name table.
///
/// Reads as a bare integer; displays as the mapped name when the code is
/// in the table, the bare code otherwise. Whether a code is *accepted* is
/// decided separately by a range validator on the field.
pub struct Coded<T> {
    code: u32,
    table: PhantomData<T>,
}

impl<T> Coded<T> {
    pub const fn new(code: u32) -> Self {
        Self {
            code,
            table: PhantomData,
        }
    }

    pub const fn code(&self) -> u32 {
        self.code
    }
}

// Manual impls: PhantomData<T> must not drag `T` bounds onto the wrapper.

impl<T> Clone for Coded<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Coded<T> {}

impl<T> fmt::Debug for Coded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coded").field(&self.code).finish()
    }
}

impl<T> PartialEq for Coded<T> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<T> Eq for Coded<T> {}

impl<T> PartialOrd for Coded<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Coded<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl<T: NameTable> fmt::Display for Coded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match T::name(self.code) {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.code),
        }
    }
}

impl<T> FromStr for Coded<T> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self::new)
    }
}

impl<T: NameTable> FieldValue for Coded<T> {
    const EXPECTED: &'static str = "an option number from the list";

    fn code(&self) -> Option<u32> {
        Some(self.code)
    }
}
