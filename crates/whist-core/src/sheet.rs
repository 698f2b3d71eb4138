use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::entry::CellInput;
use crate::error::WhistError;
use crate::players::{Player, PlayerNames, PLAYER_COUNT};
use crate::rounds::{RoundIndex, ROUND_COUNT};

/// Raw entries for every player and round, indexed `[player][round]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridInputs {
    cells: [[CellInput; ROUND_COUNT]; PLAYER_COUNT],
}

impl GridInputs {
    pub fn cell(&self, player: Player, round: RoundIndex) -> &CellInput {
        &self.cells[player.index()][round.index()]
    }

    pub fn cell_mut(&mut self, player: Player, round: RoundIndex) -> &mut CellInput {
        &mut self.cells[player.index()][round.index()]
    }

    pub fn set(&mut self, player: Player, round: RoundIndex, input: CellInput) {
        self.cells[player.index()][round.index()] = input;
    }

    /// Fills every cell with the same entries.
    pub fn filled(input: CellInput) -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| input.clone())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Player, RoundIndex, &CellInput)> {
        Player::all().flat_map(move |player| {
            RoundIndex::all().map(move |round| (player, round, self.cell(player, round)))
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A sheet handed over for a single calculation: player names plus raw
/// entries per player. Missing trailing rounds stay blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetFile {
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub entries: Vec<Vec<CellInput>>,
}

impl SheetFile {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let sheet = serde_json::from_str(contents).context("parse sheet JSON")?;
        Ok(sheet)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read sheet {}", path.display()))?;
        Self::from_json_str(&contents)
    }

    pub fn names(&self) -> Result<PlayerNames, WhistError> {
        if self.players.is_empty() {
            return Ok(PlayerNames::default());
        }
        PlayerNames::from_list(&self.players)
            .map_err(|err| WhistError::InvalidSheet(err.to_string()))
    }

    pub fn grid(&self) -> Result<GridInputs, WhistError> {
        if self.entries.len() > PLAYER_COUNT {
            return Err(WhistError::InvalidSheet(format!(
                "{} entry columns for {PLAYER_COUNT} players",
                self.entries.len()
            )));
        }
        let mut grid = GridInputs::default();
        for (seat, column) in self.entries.iter().enumerate() {
            if column.len() > ROUND_COUNT {
                return Err(WhistError::InvalidSheet(format!(
                    "player {} has {} rounds, the sheet has {ROUND_COUNT}",
                    seat + 1,
                    column.len()
                )));
            }
            let player = Player::new(seat)?;
            for (row, input) in column.iter().enumerate() {
                grid.set(player, RoundIndex::new(row)?, input.clone());
            }
        }
        Ok(grid)
    }
}
