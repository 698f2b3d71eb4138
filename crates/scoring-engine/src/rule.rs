use serde::{Deserialize, Serialize};

use whist_core::MAX_TRICKS;

/// How a single bid played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ContractOutcome {
    /// Entries outside the playable range. Scores 0, same as a legitimate zero.
    Illegal,
    Made { tricks: i32 },
    MadeNil,
    Missed { by: i32 },
}

pub fn classify(round_number: i32, bid: i32, tricks: i32) -> ContractOutcome {
    if !(0..=MAX_TRICKS).contains(&round_number)
        || tricks > round_number
        || bid < 0
        || tricks < 0
    {
        return ContractOutcome::Illegal;
    }
    if bid == tricks {
        if bid == 0 {
            ContractOutcome::MadeNil
        } else {
            ContractOutcome::Made { tricks }
        }
    } else {
        ContractOutcome::Missed {
            by: (bid - tricks).abs(),
        }
    }
}

impl ContractOutcome {
    pub fn points(&self, round_number: i32) -> i32 {
        match *self {
            ContractOutcome::Illegal => 0,
            ContractOutcome::Made { tricks } => 10 + tricks * tricks,
            ContractOutcome::MadeNil if round_number < 8 => 15,
            ContractOutcome::MadeNil => 30,
            ContractOutcome::Missed { by } => 8 / by,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractOutcome::Illegal => "illegal",
            ContractOutcome::Made { .. } => "made",
            ContractOutcome::MadeNil => "nil",
            ContractOutcome::Missed { .. } => "missed",
        }
    }
}

/// Score for one player in one round.
///
/// `round_number` is the effective round (1 to 13; fixed-trump rounds pass
/// 13). Out-of-range entries score 0 rather than failing, so an illegal cell
/// cannot be told apart from a legitimate zero.
pub fn score(round_number: i32, bid: i32, tricks: i32) -> i32 {
    classify(round_number, bid, tricks).points(round_number)
}
