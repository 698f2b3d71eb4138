use serde::{Deserialize, Serialize};

use crate::ScoreReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub seat: usize,
    pub name: String,
    pub total: i32,
}

/// Players by descending total. Equal totals share a rank and keep seat order.
pub fn standings(report: &ScoreReport) -> Vec<Standing> {
    let mut ordered: Vec<_> = report.players.iter().collect();
    ordered.sort_by(|a, b| b.total.cmp(&a.total).then(a.seat.cmp(&b.seat)));

    let mut result: Vec<Standing> = Vec::with_capacity(ordered.len());
    for (position, line) in ordered.into_iter().enumerate() {
        let rank = match result.last() {
            Some(previous) if previous.total == line.total => previous.rank,
            _ => position + 1,
        };
        result.push(Standing {
            rank,
            seat: line.seat,
            name: line.name.clone(),
            total: line.total,
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;
    use crate::PlayerLine;

    fn line(seat: usize, total: i32) -> PlayerLine {
        PlayerLine {
            seat,
            name: format!("P{seat}"),
            rounds: Vec::new(),
            total,
        }
    }

    #[test]
    fn test_ties_share_rank() {
        let report = ScoreReport {
            generated_at: OffsetDateTime::UNIX_EPOCH,
            players: vec![line(1, 40), line(2, 90), line(3, 40), line(4, 10)],
            grand_total: 180,
        };
        let ranks: Vec<(usize, usize)> = standings(&report)
            .iter()
            .map(|standing| (standing.rank, standing.seat))
            .collect();
        assert_eq!(ranks, vec![(1, 2), (2, 1), (2, 3), (4, 4)]);
    }
}
