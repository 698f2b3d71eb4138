use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stand-in for an entry that is not a number. Always fails validation.
pub const INVALID_ENTRY: i32 = -1;

/// A bid or trick count exactly as it was entered.
///
/// Anything a sheet file holds that is neither an integer nor a string
/// (floats, `null`, booleans, integers past `i64`) lands in `Other` and never
/// parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Number(i64),
    Text(String),
    Other(Value),
}

impl Default for RawEntry {
    fn default() -> Self {
        RawEntry::Text(String::new())
    }
}

impl RawEntry {
    pub fn parse(&self) -> Option<i32> {
        match self {
            RawEntry::Number(value) => i32::try_from(*value).ok(),
            RawEntry::Text(text) => text.trim().parse().ok(),
            RawEntry::Other(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            RawEntry::Text(text) => text.trim().is_empty(),
            RawEntry::Other(value) => value.is_null(),
            RawEntry::Number(_) => false,
        }
    }
}

impl fmt::Display for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawEntry::Number(value) => write!(f, "{value}"),
            RawEntry::Text(text) => write!(f, "{text}"),
            RawEntry::Other(Value::Null) => Ok(()),
            RawEntry::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<i32> for RawEntry {
    fn from(value: i32) -> Self {
        RawEntry::Number(value.into())
    }
}

impl From<&str> for RawEntry {
    fn from(value: &str) -> Self {
        RawEntry::Text(value.to_string())
    }
}

impl From<String> for RawEntry {
    fn from(value: String) -> Self {
        RawEntry::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryField {
    Bid,
    Tricks,
}

impl EntryField {
    pub fn toggle(self) -> Self {
        match self {
            EntryField::Bid => EntryField::Tricks,
            EntryField::Tricks => EntryField::Bid,
        }
    }
}

/// The two entries of one cell of the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellInput {
    #[serde(default)]
    pub bid: RawEntry,
    #[serde(default)]
    pub tricks: RawEntry,
}

impl CellInput {
    pub fn new(bid: impl Into<RawEntry>, tricks: impl Into<RawEntry>) -> Self {
        Self {
            bid: bid.into(),
            tricks: tricks.into(),
        }
    }

    pub fn entry(&self, field: EntryField) -> &RawEntry {
        match field {
            EntryField::Bid => &self.bid,
            EntryField::Tricks => &self.tricks,
        }
    }

    pub fn entry_mut(&mut self, field: EntryField) -> &mut RawEntry {
        match field {
            EntryField::Bid => &mut self.bid,
            EntryField::Tricks => &mut self.tricks,
        }
    }

    /// Numeric bid and tricks. If either side is not a number both collapse
    /// to `INVALID_ENTRY`.
    pub fn resolve(&self) -> (i32, i32) {
        match (self.bid.parse(), self.tricks.parse()) {
            (Some(bid), Some(tricks)) => (bid, tricks),
            _ => (INVALID_ENTRY, INVALID_ENTRY),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.bid.is_blank() && self.tricks.is_blank()
    }
}
