pub mod config;
pub mod entry;
pub mod error;
pub mod players;
pub mod rounds;
pub mod sheet;

pub use config::{Config, ConfigPaths};
pub use entry::{CellInput, EntryField, RawEntry, INVALID_ENTRY};
pub use error::WhistError;
pub use players::{Player, PlayerNames, PLAYER_COUNT};
pub use rounds::{RoundIndex, RoundInfo, Trump, MAX_TRICKS, ROUND_COUNT, ROUND_TABLE};
pub use sheet::{GridInputs, SheetFile};
