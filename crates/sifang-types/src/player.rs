use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::PLAYER_COUNT;

/// Stable seat identity for one of the four players.
///
/// Valid values are `1..=4`, matching the original scorekeeping record
/// format. Seating order never changes for the lifetime of a game: seat
/// index 0 is the first seated player, and so on.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a `PlayerId`, rejecting anything outside `1..=4`.
    pub fn new(id: u8) -> Result<Self, TypeError> {
        if (1..=PLAYER_COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(TypeError::InvalidPlayerId(id))
        }
    }

    /// The first seated player (seat index 0).
    pub const fn first() -> Self {
        Self(1)
    }

    /// The player at the given 0-based seat index.
    pub fn from_seat(index: usize) -> Result<Self, TypeError> {
        if index < PLAYER_COUNT {
            Ok(Self(index as u8 + 1))
        } else {
            Err(TypeError::InvalidSeatIndex(index))
        }
    }

    /// 0-based seating position.
    pub fn seat_index(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// Raw numeric identity (1..=4).
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// All four players in seating order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (1..=PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = TypeError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> u8 {
        id.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
