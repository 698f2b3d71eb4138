use anyhow::Result;
use tracing::debug;

use scoring_engine::{classify, score};
use whist_core::{CellInput, RawEntry};

pub fn execute(round: i64, bid: i64, tricks: i64) -> Result<()> {
    println!("{}", score_args(round, bid, tricks));
    Ok(())
}

/// Bid and tricks go through the same sanitising as sheet entries, so
/// values past `i32` score 0 instead of failing.
fn score_args(round: i64, bid: i64, tricks: i64) -> i32 {
    let (bid, tricks) = CellInput::new(RawEntry::Number(bid), RawEntry::Number(tricks)).resolve();
    let Ok(round) = i32::try_from(round) else {
        debug!(round, "round out of range");
        return 0;
    };
    let outcome = classify(round, bid, tricks);
    debug!(round, bid, tricks, outcome = outcome.label(), "scored single cell");
    score(round, bid, tricks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_args_in_range() {
        assert_eq!(score_args(5, 3, 3), 19);
        assert_eq!(score_args(10, 0, 0), 30);
        assert_eq!(score_args(5, 2, 4), 4);
    }

    #[test]
    fn test_score_args_out_of_range_score_zero() {
        assert_eq!(score_args(5, 99_999_999_999, 0), 0);
        assert_eq!(score_args(5, 0, i64::MIN), 0);
        assert_eq!(score_args(4_294_967_301, 1, 1), 0);
    }
}
