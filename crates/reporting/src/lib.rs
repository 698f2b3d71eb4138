use std::fmt::Write;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use scoring_engine::{classify, ContractOutcome, Recomputation, Scoresheet};
use whist_core::{GridInputs, Player, PlayerNames, RawEntry, RoundIndex};

pub mod json;
pub mod standings;

pub use standings::{standings, Standing};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundLine {
    pub label: String,
    pub effective_round: i32,
    pub bid: RawEntry,
    pub tricks: RawEntry,
    pub outcome: ContractOutcome,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLine {
    pub seat: usize,
    pub name: String,
    pub rounds: Vec<RoundLine>,
    pub total: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub generated_at: OffsetDateTime,
    pub players: Vec<PlayerLine>,
    pub grand_total: i32,
}

impl ScoreReport {
    pub fn new(names: &PlayerNames, inputs: &GridInputs, results: &Recomputation) -> Self {
        let players = Player::all()
            .map(|player| PlayerLine {
                seat: player.index() + 1,
                name: names.display(player),
                rounds: RoundIndex::all()
                    .map(|round| {
                        let cell = inputs.cell(player, round);
                        let (bid, tricks) = cell.resolve();
                        RoundLine {
                            label: round.to_string(),
                            effective_round: round.effective_round(),
                            bid: cell.bid.clone(),
                            tricks: cell.tricks.clone(),
                            outcome: classify(round.effective_round(), bid, tricks),
                            score: results.score_at(player, round),
                        }
                    })
                    .collect(),
                total: results.total_for(player),
            })
            .collect();

        Self {
            generated_at: OffsetDateTime::now_utc(),
            players,
            grand_total: results.grand_total,
        }
    }

    /// Report of the last calculation. Edits made since then are not shown.
    pub fn from_sheet(sheet: &Scoresheet) -> Self {
        Self::new(sheet.names(), sheet.scored_inputs(), sheet.results())
    }

    /// Rounds down, players across; each cell shows `bid/tricks score`.
    pub fn human_summary(&self) -> String {
        let mut output = String::new();
        let _ = write!(output, "{:<6}", "Round");
        for line in &self.players {
            let _ = write!(output, "| {:<14}", truncate(&line.name, 14));
        }
        output.push('\n');

        let rounds = self.players.first().map(|line| line.rounds.len()).unwrap_or(0);
        for row in 0..rounds {
            let label = &self.players[0].rounds[row].label;
            let _ = write!(output, "{label:<6}");
            for line in &self.players {
                let _ = write!(output, "| {:<14}", cell_text(&line.rounds[row]));
            }
            output.push('\n');
        }

        let _ = write!(output, "{:<6}", "Total");
        for line in &self.players {
            let _ = write!(output, "| {:>14}", line.total);
        }
        output.push('\n');

        let _ = writeln!(output, "Grand total: {}", self.grand_total);
        if let Some(leader) = standings(self).first() {
            let _ = writeln!(output, "Leading: {} with {}", leader.name, leader.total);
        }
        output
    }

    pub fn illegal_cells(&self) -> usize {
        self.players
            .iter()
            .flat_map(|line| &line.rounds)
            .filter(|round| {
                round.outcome == ContractOutcome::Illegal
                    && !(round.bid.is_blank() && round.tricks.is_blank())
            })
            .count()
    }
}

fn cell_text(round: &RoundLine) -> String {
    if round.bid.is_blank() && round.tricks.is_blank() {
        return "-".to_string();
    }
    format!("{}/{} {:>4}", round.bid, round.tricks, round.score)
}

fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}
