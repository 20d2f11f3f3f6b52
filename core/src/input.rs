use core::fmt;
use core::str::FromStr;

use crate::*;

/// Event accepted on the input channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    Move(Direction),
    Undo,
}

impl InputToken {
    pub const fn as_str(self) -> &'static str {
        use Direction::*;
        match self {
            Self::Move(Up) => "up",
            Self::Move(Down) => "down",
            Self::Move(Left) => "left",
            Self::Move(Right) => "right",
            Self::Undo => "u",
        }
    }
}

impl FromStr for InputToken {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self> {
        use Direction::*;
        Ok(match token {
            "up" => Self::Move(Up),
            "down" => Self::Move(Down),
            "left" => Self::Move(Left),
            "right" => Self::Move(Right),
            "u" => Self::Undo,
            _ => return Err(GameError::UnknownToken),
        })
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
