use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WhistError;

pub const PLAYER_COUNT: usize = 4;

/// A seat at the table, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(usize);

impl Player {
    pub const FIRST: Player = Player(0);

    pub fn new(index: usize) -> Result<Self, WhistError> {
        if index < PLAYER_COUNT {
            Ok(Self(index))
        } else {
            Err(WhistError::PlayerOutOfRange(index))
        }
    }

    /// Seat that holds position `seat` modulo the table size.
    pub(crate) fn wrapping(seat: usize) -> Self {
        Self(seat % PLAYER_COUNT)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Player> {
        (0..PLAYER_COUNT).map(Player)
    }

    pub fn next(self) -> Self {
        Self::wrapping(self.0 + 1)
    }

    pub fn prev(self) -> Self {
        Self::wrapping(self.0 + PLAYER_COUNT - 1)
    }

    pub fn default_name(self) -> String {
        format!("Player{}", self.0 + 1)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames([String; PLAYER_COUNT]);

impl Default for PlayerNames {
    fn default() -> Self {
        Self(std::array::from_fn(|seat| Player(seat).default_name()))
    }
}

impl PlayerNames {
    pub fn from_list(names: &[String]) -> Result<Self, WhistError> {
        let names: [String; PLAYER_COUNT] = names.to_vec().try_into().map_err(|names: Vec<String>| {
            WhistError::InvalidConfig(format!(
                "expected {PLAYER_COUNT} player names, found {}",
                names.len()
            ))
        })?;
        Ok(Self(names))
    }

    /// Name as typed, possibly blank.
    pub fn raw(&self, player: Player) -> &str {
        &self.0[player.0]
    }

    pub fn raw_mut(&mut self, player: Player) -> &mut String {
        &mut self.0[player.0]
    }

    /// Name for display; blank entries fall back to the seat default.
    pub fn display(&self, player: Player) -> String {
        let name = self.0[player.0].trim();
        if name.is_empty() {
            player.default_name()
        } else {
            name.to_string()
        }
    }

    pub fn set(&mut self, player: Player, name: impl Into<String>) {
        self.0[player.0] = name.into();
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_bounds() {
        assert!(Player::new(3).is_ok());
        assert!(matches!(Player::new(4), Err(WhistError::PlayerOutOfRange(4))));
        assert_eq!(Player::all().count(), PLAYER_COUNT);
    }

    #[test]
    fn test_seat_navigation_wraps() {
        let last = Player::new(3).unwrap();
        assert_eq!(last.next().index(), 0);
        assert_eq!(Player::new(0).unwrap().prev().index(), 3);
    }

    #[test]
    fn test_default_names() {
        let names = PlayerNames::default();
        let first = Player::new(0).unwrap();
        assert_eq!(names.display(first), "Player1");
        assert_eq!(names.display(Player::new(3).unwrap()), "Player4");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let mut names = PlayerNames::default();
        let seat = Player::new(1).unwrap();
        names.set(seat, "   ");
        assert_eq!(names.display(seat), "Player2");
        names.set(seat, " Ada ");
        assert_eq!(names.display(seat), "Ada");
    }

    #[test]
    fn test_from_list_requires_four() {
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(matches!(
            PlayerNames::from_list(&three),
            Err(WhistError::InvalidConfig(_))
        ));
    }
}
