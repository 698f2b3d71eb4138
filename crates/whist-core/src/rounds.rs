//! The fixed round table of the sheet.
//!
//! Rounds 1 to 12 deal as many cards as their number. The last five rows are
//! 13-card rounds played with a fixed trump (clubs, diamonds, hearts, spades,
//! then no trump). Every 13-card row scores as round 13; the trump only
//! labels the row.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::entry::INVALID_ENTRY;
use crate::error::WhistError;
use crate::players::Player;

pub const ROUND_COUNT: usize = 17;
pub const MAX_TRICKS: i32 = 13;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trump {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Trump {
    pub fn suffix(&self) -> &'static str {
        match self {
            Trump::Clubs => "C",
            Trump::Diamonds => "D",
            Trump::Hearts => "H",
            Trump::Spades => "S",
            Trump::NoTrump => "NT",
        }
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Trump::Clubs => "clubs",
            Trump::Diamonds => "diamonds",
            Trump::Hearts => "hearts",
            Trump::Spades => "spades",
            Trump::NoTrump => "no trump",
        };
        write!(f, "{value}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundInfo {
    /// 0-based row on the sheet.
    pub index: usize,
    /// Round number handed to the scoring rule.
    pub effective_round: i32,
    pub label: &'static str,
    pub trump: Option<Trump>,
}

impl RoundInfo {
    const fn dealt(index: usize, label: &'static str) -> Self {
        Self {
            index,
            effective_round: index as i32 + 1,
            label,
            trump: None,
        }
    }

    const fn fixed_trump(index: usize, label: &'static str, trump: Trump) -> Self {
        Self {
            index,
            effective_round: MAX_TRICKS,
            label,
            trump: Some(trump),
        }
    }

    /// Seat that starts the round.
    pub fn leader(&self) -> Player {
        Player::wrapping(self.index)
    }

    /// Values a spinner offers for bid and tricks in this round.
    pub fn entry_range(&self) -> RangeInclusive<i32> {
        INVALID_ENTRY..=self.effective_round
    }
}

pub const ROUND_TABLE: [RoundInfo; ROUND_COUNT] = [
    RoundInfo::dealt(0, "1"),
    RoundInfo::dealt(1, "2"),
    RoundInfo::dealt(2, "3"),
    RoundInfo::dealt(3, "4"),
    RoundInfo::dealt(4, "5"),
    RoundInfo::dealt(5, "6"),
    RoundInfo::dealt(6, "7"),
    RoundInfo::dealt(7, "8"),
    RoundInfo::dealt(8, "9"),
    RoundInfo::dealt(9, "10"),
    RoundInfo::dealt(10, "11"),
    RoundInfo::dealt(11, "12"),
    RoundInfo::fixed_trump(12, "13C", Trump::Clubs),
    RoundInfo::fixed_trump(13, "13D", Trump::Diamonds),
    RoundInfo::fixed_trump(14, "13H", Trump::Hearts),
    RoundInfo::fixed_trump(15, "13S", Trump::Spades),
    RoundInfo::fixed_trump(16, "13NT", Trump::NoTrump),
];

/// A row of the sheet, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundIndex(usize);

impl RoundIndex {
    pub const FIRST: RoundIndex = RoundIndex(0);

    pub fn new(index: usize) -> Result<Self, WhistError> {
        if index < ROUND_COUNT {
            Ok(Self(index))
        } else {
            Err(WhistError::RoundOutOfRange(index))
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = RoundIndex> {
        (0..ROUND_COUNT).map(RoundIndex)
    }

    pub fn info(self) -> &'static RoundInfo {
        &ROUND_TABLE[self.0]
    }

    pub fn effective_round(self) -> i32 {
        self.info().effective_round
    }

    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(RoundIndex)
    }
}

impl fmt::Display for RoundIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_capped_round_number() {
        for (index, info) in ROUND_TABLE.iter().enumerate() {
            assert_eq!(info.index, index);
            assert_eq!(info.effective_round, (index as i32 + 1).min(MAX_TRICKS));
        }
    }

    #[test]
    fn test_fixed_trump_rows() {
        let trumps: Vec<Trump> = ROUND_TABLE.iter().filter_map(|info| info.trump).collect();
        assert_eq!(
            trumps,
            vec![
                Trump::Clubs,
                Trump::Diamonds,
                Trump::Hearts,
                Trump::Spades,
                Trump::NoTrump
            ]
        );
        for info in &ROUND_TABLE[12..] {
            assert_eq!(info.effective_round, 13);
            assert!(info.label.starts_with("13"));
            assert!(info.label.ends_with(info.trump.unwrap().suffix()));
        }
        assert!(ROUND_TABLE[..12].iter().all(|info| info.trump.is_none()));
    }

    #[test]
    fn test_leader_rotates() {
        let leaders: Vec<usize> = ROUND_TABLE[..6]
            .iter()
            .map(|info| info.leader().index())
            .collect();
        assert_eq!(leaders, vec![0, 1, 2, 3, 0, 1]);
        assert_eq!(ROUND_TABLE[16].leader().index(), 0);
    }

    #[test]
    fn test_entry_range() {
        assert_eq!(ROUND_TABLE[0].entry_range(), -1..=1);
        assert_eq!(ROUND_TABLE[16].entry_range(), -1..=13);
    }

    #[test]
    fn test_round_index_bounds() {
        assert!(RoundIndex::new(16).is_ok());
        assert!(matches!(RoundIndex::new(17), Err(WhistError::RoundOutOfRange(17))));
        assert_eq!(RoundIndex::all().count(), ROUND_COUNT);
        assert_eq!(RoundIndex::new(16).unwrap().next(), None);
        assert_eq!(RoundIndex::new(0).unwrap().prev(), None);
        assert_eq!(RoundIndex::new(14).unwrap().to_string(), "13H");
    }
}
