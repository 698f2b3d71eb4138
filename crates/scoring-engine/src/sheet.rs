use tracing::debug;

use whist_core::{
    CellInput, EntryField, GridInputs, Player, PlayerNames, RawEntry, RoundIndex, INVALID_ENTRY,
};

use crate::aggregate::{recompute, Recomputation};

/// Sheet state shared with a front end: names, raw entries and the result
/// of the last pass. Edits never touch the scores; only `calculate` does.
#[derive(Debug, Clone, Default)]
pub struct Scoresheet {
    names: PlayerNames,
    inputs: GridInputs,
    /// The entries `results` was computed from.
    scored: GridInputs,
    results: Recomputation,
}

impl Scoresheet {
    pub fn new(names: PlayerNames) -> Self {
        Self::from_inputs(names, GridInputs::default())
    }

    pub fn from_inputs(names: PlayerNames, inputs: GridInputs) -> Self {
        Self {
            names,
            inputs,
            scored: GridInputs::default(),
            results: Recomputation::default(),
        }
    }

    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut PlayerNames {
        &mut self.names
    }

    pub fn inputs(&self) -> &GridInputs {
        &self.inputs
    }

    pub fn cell(&self, player: Player, round: RoundIndex) -> &CellInput {
        self.inputs.cell(player, round)
    }

    pub fn entry_mut(&mut self, player: Player, round: RoundIndex, field: EntryField) -> &mut RawEntry {
        self.inputs.cell_mut(player, round).entry_mut(field)
    }

    pub fn set_bid(&mut self, player: Player, round: RoundIndex, bid: impl Into<RawEntry>) {
        self.inputs.cell_mut(player, round).bid = bid.into();
    }

    pub fn set_tricks(&mut self, player: Player, round: RoundIndex, tricks: impl Into<RawEntry>) {
        self.inputs.cell_mut(player, round).tricks = tricks.into();
    }

    /// Spinner step: moves the entry by `delta` within the round's entry
    /// range. Entries that are not numbers step from `INVALID_ENTRY`.
    pub fn step(&mut self, player: Player, round: RoundIndex, field: EntryField, delta: i32) {
        let range = round.info().entry_range();
        let entry = self.entry_mut(player, round, field);
        let current = entry.parse().unwrap_or(INVALID_ENTRY);
        let next = current
            .saturating_add(delta)
            .clamp(*range.start(), *range.end());
        *entry = RawEntry::from(next);
    }

    pub fn clear_cell(&mut self, player: Player, round: RoundIndex) {
        self.inputs.set(player, round, CellInput::default());
    }

    /// Clears every entry and score; names stay.
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.scored.clear();
        self.results = Recomputation::default();
    }

    /// Runs a full pass and keeps its result. Returns the grand total.
    pub fn calculate(&mut self) -> i32 {
        self.results = recompute(&self.inputs);
        self.scored = self.inputs.clone();
        debug!(grand_total = self.results.grand_total, "scoresheet calculated");
        self.results.grand_total
    }

    /// Entries as of the last `calculate`, matching `results`.
    pub fn scored_inputs(&self) -> &GridInputs {
        &self.scored
    }

    pub fn results(&self) -> &Recomputation {
        &self.results
    }

    pub fn score_at(&self, player: Player, round: RoundIndex) -> i32 {
        self.results.score_at(player, round)
    }

    pub fn total_for(&self, player: Player) -> i32 {
        self.results.total_for(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(index: usize) -> Player {
        Player::new(index).unwrap()
    }

    fn row(index: usize) -> RoundIndex {
        RoundIndex::new(index).unwrap()
    }

    #[test]
    fn test_edits_wait_for_calculate() {
        let mut sheet = Scoresheet::default();
        sheet.set_bid(seat(0), row(4), 3);
        sheet.set_tricks(seat(0), row(4), "3");
        assert_eq!(sheet.score_at(seat(0), row(4)), 0);

        assert_eq!(sheet.calculate(), 19);
        assert_eq!(sheet.score_at(seat(0), row(4)), 19);
        assert_eq!(sheet.total_for(seat(0)), 19);

        sheet.set_tricks(seat(0), row(4), 2);
        assert_eq!(sheet.score_at(seat(0), row(4)), 19);
        assert_eq!(sheet.calculate(), 8);
    }

    #[test]
    fn test_scored_inputs_follow_calculate() {
        let mut sheet = Scoresheet::default();
        sheet.set_bid(seat(1), row(6), 2);
        sheet.set_tricks(seat(1), row(6), 2);
        assert!(sheet.scored_inputs().cell(seat(1), row(6)).is_blank());

        sheet.calculate();
        sheet.set_tricks(seat(1), row(6), 5);
        assert_eq!(sheet.scored_inputs().cell(seat(1), row(6)).resolve(), (2, 2));
        assert_eq!(sheet.cell(seat(1), row(6)).resolve(), (2, 5));

        sheet.reset();
        assert!(sheet.scored_inputs().cell(seat(1), row(6)).is_blank());
    }

    #[test]
    fn test_step_clamps_to_round() {
        let mut sheet = Scoresheet::default();
        sheet.step(seat(1), row(1), EntryField::Bid, 1);
        assert_eq!(sheet.cell(seat(1), row(1)).bid.parse(), Some(0));

        for _ in 0..5 {
            sheet.step(seat(1), row(1), EntryField::Bid, 1);
        }
        assert_eq!(sheet.cell(seat(1), row(1)).bid.parse(), Some(2));

        for _ in 0..5 {
            sheet.step(seat(1), row(1), EntryField::Bid, -1);
        }
        assert_eq!(sheet.cell(seat(1), row(1)).bid.parse(), Some(INVALID_ENTRY));
    }

    #[test]
    fn test_step_replaces_text() {
        let mut sheet = Scoresheet::default();
        sheet.set_tricks(seat(2), row(16), "abc");
        sheet.step(seat(2), row(16), EntryField::Tricks, 2);
        assert_eq!(sheet.cell(seat(2), row(16)).tricks, RawEntry::from(1));
    }

    #[test]
    fn test_clear_and_reset() {
        let mut sheet = Scoresheet::default();
        sheet.names_mut().set(seat(0), "Ann");
        sheet.set_bid(seat(0), row(0), 1);
        sheet.set_tricks(seat(0), row(0), 1);
        sheet.set_bid(seat(3), row(8), 0);
        sheet.set_tricks(seat(3), row(8), 0);
        assert_eq!(sheet.calculate(), 11 + 30);

        sheet.clear_cell(seat(3), row(8));
        assert!(sheet.cell(seat(3), row(8)).is_blank());
        assert_eq!(sheet.calculate(), 11);

        sheet.reset();
        assert_eq!(sheet.results(), &Recomputation::default());
        assert!(sheet.inputs().iter().all(|(_, _, cell)| cell.is_blank()));
        assert_eq!(sheet.names().display(seat(0)), "Ann");
    }
}
