use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use whist_core::{GridInputs, Player, RoundIndex, PLAYER_COUNT, ROUND_COUNT};

use crate::rule::score;

/// Result of one pass over the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recomputation {
    pub scores: [[i32; ROUND_COUNT]; PLAYER_COUNT],
    pub totals: [i32; PLAYER_COUNT],
    pub grand_total: i32,
}

impl Default for Recomputation {
    fn default() -> Self {
        Self {
            scores: [[0; ROUND_COUNT]; PLAYER_COUNT],
            totals: [0; PLAYER_COUNT],
            grand_total: 0,
        }
    }
}

impl Recomputation {
    pub fn score_at(&self, player: Player, round: RoundIndex) -> i32 {
        self.scores[player.index()][round.index()]
    }

    pub fn total_for(&self, player: Player) -> i32 {
        self.totals[player.index()]
    }
}

/// Scores every cell from scratch and sums the totals.
///
/// Cells whose entries are not numbers score 0 and leave the rest of the
/// sheet untouched.
pub fn recompute(inputs: &GridInputs) -> Recomputation {
    let mut result = Recomputation::default();

    for (player, round, cell) in inputs.iter() {
        let (bid, tricks) = cell.resolve();
        let points = score(round.effective_round(), bid, tricks);
        if points == 0 && !cell.is_blank() {
            trace!(player = %player, round = %round, bid = %cell.bid, tricks = %cell.tricks, "cell scored zero");
        }
        result.scores[player.index()][round.index()] = points;
        result.totals[player.index()] += points;
    }

    result.grand_total = result.totals.iter().sum();
    debug!(grand_total = result.grand_total, totals = ?result.totals, "recomputed sheet");
    result
}
