//! Scoreboard state: the sheet, the cursor and what is being edited.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use reporting::{standings, ScoreReport, Standing};
use scoring_engine::Scoresheet;
use whist_core::{EntryField, Player, PlayerNames, RawEntry, RoundIndex};

/// Longest entry accepted from the keyboard.
const MAX_ENTRY_LEN: usize = 3;
/// How long a status message stays in the footer.
const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Sheet,
    Standings,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Sheet, Screen::Standings];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Sheet => "Scoresheet",
            Screen::Standings => "Standings",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Screen::Sheet => Screen::Standings,
            Screen::Standings => Screen::Sheet,
        }
    }

    pub fn prev(&self) -> Self {
        self.next()
    }
}

/// Cell and side (bid or tricks) under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub player: Player,
    pub round: RoundIndex,
    pub field: EntryField,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            player: Player::FIRST,
            round: RoundIndex::FIRST,
            field: EntryField::Bid,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub current_screen: Screen,
    pub running: bool,
    pub sheet: Scoresheet,
    pub cursor: Cursor,
    /// Seat whose name is being typed, if any.
    pub editing_name: Option<Player>,
    pub highlight_leader: bool,
    /// Entries changed since the last calculation.
    pub dirty: bool,
    pub calculations: u32,
    status: Option<(String, Instant)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(PlayerNames::default(), true)
    }
}

impl App {
    pub fn new(names: PlayerNames, highlight_leader: bool) -> Self {
        let mut sheet = Scoresheet::new(names);
        let initial = sheet.calculate();
        debug!(grand_total = initial, "scoreboard initialised");
        Self {
            current_screen: Screen::Sheet,
            running: true,
            sheet,
            cursor: Cursor::default(),
            editing_name: None,
            highlight_leader,
            dirty: false,
            calculations: 0,
            status: None,
        }
    }

    pub fn next_screen(&mut self) {
        self.current_screen = self.current_screen.next();
    }

    pub fn prev_screen(&mut self) {
        self.current_screen = self.current_screen.prev();
    }

    pub fn move_up(&mut self) {
        if let Some(round) = self.cursor.round.prev() {
            self.cursor.round = round;
        }
    }

    pub fn move_down(&mut self) {
        if let Some(round) = self.cursor.round.next() {
            self.cursor.round = round;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.field == EntryField::Tricks {
            self.cursor.player = self.cursor.player.next();
        }
        self.cursor.field = self.cursor.field.toggle();
    }

    pub fn move_left(&mut self) {
        if self.cursor.field == EntryField::Bid {
            self.cursor.player = self.cursor.player.prev();
        }
        self.cursor.field = self.cursor.field.toggle();
    }

    pub fn current_entry(&self) -> &RawEntry {
        self.sheet
            .cell(self.cursor.player, self.cursor.round)
            .entry(self.cursor.field)
    }

    /// Appends a typed character to the entry under the cursor. A value
    /// left by the spinner is replaced rather than extended.
    pub fn type_char(&mut self, c: char) {
        let Cursor { player, round, field } = self.cursor;
        let entry = self.sheet.entry_mut(player, round, field);
        let mut text = match &*entry {
            RawEntry::Number(_) => String::new(),
            other => other.to_string(),
        };
        if text.chars().count() >= MAX_ENTRY_LEN {
            return;
        }
        text.push(c);
        *entry = RawEntry::from(text);
        self.dirty = true;
    }

    pub fn backspace(&mut self) {
        let Cursor { player, round, field } = self.cursor;
        let entry = self.sheet.entry_mut(player, round, field);
        let mut text = entry.to_string();
        text.pop();
        *entry = RawEntry::from(text);
        self.dirty = true;
    }

    pub fn step(&mut self, delta: i32) {
        let Cursor { player, round, field } = self.cursor;
        self.sheet.step(player, round, field, delta);
        self.dirty = true;
    }

    pub fn clear_cell(&mut self) {
        self.sheet.clear_cell(self.cursor.player, self.cursor.round);
        self.dirty = true;
    }

    pub fn reset(&mut self) {
        self.sheet.reset();
        self.dirty = false;
        self.set_status("Sheet cleared");
        info!("scoresheet reset");
    }

    pub fn calculate(&mut self) -> i32 {
        let grand_total = self.sheet.calculate();
        self.calculations = self.calculations.saturating_add(1);
        self.dirty = false;
        self.set_status(format!("Calculated: grand total {grand_total}"));
        grand_total
    }

    pub fn begin_name_edit(&mut self) {
        self.editing_name = Some(self.cursor.player);
    }

    pub fn finish_name_edit(&mut self) {
        if let Some(player) = self.editing_name.take() {
            let name = self.sheet.names().display(player);
            self.set_status(format!("Seat {player} is {name}"));
        }
    }

    pub fn name_push(&mut self, c: char) {
        if let Some(player) = self.editing_name {
            self.sheet.names_mut().raw_mut(player).push(c);
        }
    }

    pub fn name_pop(&mut self) {
        if let Some(player) = self.editing_name {
            self.sheet.names_mut().raw_mut(player).pop();
        }
    }

    /// Standings as of the last calculation.
    pub fn standings(&self) -> Vec<Standing> {
        standings(&ScoreReport::from_sheet(&self.sheet))
    }

    pub fn grand_total(&self) -> i32 {
        self.sheet.results().grand_total
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Drops the status message once it has been shown long enough.
    pub fn expire_status(&mut self) {
        if matches!(&self.status, Some((_, since)) if since.elapsed() >= STATUS_TTL) {
            self.status = None;
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new() {
        let app = App::default();
        assert!(app.running);
        assert_eq!(app.current_screen, Screen::Sheet);
        assert_eq!(app.grand_total(), 0);
        assert_eq!(app.cursor.field, EntryField::Bid);
        assert!(!app.dirty);
    }

    #[test]
    fn test_cursor_walks_fields_then_seats() {
        let mut app = App::default();
        app.move_right();
        assert_eq!(app.cursor.field, EntryField::Tricks);
        assert_eq!(app.cursor.player.index(), 0);
        app.move_right();
        assert_eq!(app.cursor.field, EntryField::Bid);
        assert_eq!(app.cursor.player.index(), 1);
        app.move_left();
        app.move_left();
        assert_eq!(app.cursor.player.index(), 0);
        app.move_left();
        assert_eq!(app.cursor.player.index(), 3);
        assert_eq!(app.cursor.field, EntryField::Tricks);
    }

    #[test]
    fn test_cursor_stops_at_sheet_edges() {
        let mut app = App::default();
        app.move_up();
        assert_eq!(app.cursor.round.index(), 0);
        for _ in 0..40 {
            app.move_down();
        }
        assert_eq!(app.cursor.round.index(), 16);
    }

    #[test]
    fn test_typing_and_calculate() {
        let mut app = App::default();
        for _ in 0..4 {
            app.move_down();
        }
        app.type_char('3');
        app.move_right();
        app.type_char('3');
        assert!(app.dirty);
        assert_eq!(app.grand_total(), 0);

        assert_eq!(app.calculate(), 19);
        assert!(!app.dirty);
        assert_eq!(app.calculations, 1);
        assert!(app.status().unwrap().contains("19"));
    }

    #[test]
    fn test_typing_replaces_stepped_value() {
        let mut app = App::default();
        app.step(-1);
        assert_eq!(app.current_entry().to_string(), "-1");
        app.type_char('3');
        assert_eq!(app.current_entry().to_string(), "3");
        app.type_char('1');
        assert_eq!(app.current_entry().to_string(), "31");

        app.move_down();
        app.move_down();
        app.step(1);
        app.step(1);
        app.type_char('0');
        assert_eq!(app.current_entry().parse(), Some(0));
    }

    #[test]
    fn test_entry_length_is_capped() {
        let mut app = App::default();
        for c in "12345".chars() {
            app.type_char(c);
        }
        assert_eq!(app.current_entry().to_string(), "123");
        app.backspace();
        assert_eq!(app.current_entry().to_string(), "12");
    }

    #[test]
    fn test_name_editing() {
        let mut app = App::default();
        app.move_right();
        app.move_right();
        app.begin_name_edit();
        for _ in 0.."Player2".len() {
            app.name_pop();
        }
        for c in "Bo".chars() {
            app.name_push(c);
        }
        app.finish_name_edit();
        assert!(app.editing_name.is_none());
        assert_eq!(app.sheet.names().display(app.cursor.player), "Bo");
    }

    #[test]
    fn test_standings_follow_calculation() {
        let mut app = App::default();
        app.step(1);
        app.move_right();
        app.step(1);
        app.calculate();
        let table = app.standings();
        assert_eq!(table[0].seat, 1);
        assert_eq!(table[0].total, 15);
        assert_eq!(table[1].rank, 2);
    }
}
