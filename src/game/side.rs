//! Home/away side selection

use std::fmt;

use serde::{Deserialize, Serialize};

/// The side of the board that currently receives score button clicks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    /// Games open with the visitors selected
    #[default]
    Away,
}

impl Side {
    /// The opposite side
    pub fn other(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips_between_home_and_away() {
        assert_eq!(Side::Home.other(), Side::Away);
        assert_eq!(Side::Away.other(), Side::Home);
    }

    #[test]
    fn default_side_is_away() {
        assert_eq!(Side::default(), Side::Away);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Home).unwrap(), "\"home\"");
        assert_eq!(Side::Away.to_string(), "away");
    }
}
