//! Sport presets for score buttons

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A sport with a known set of scoring buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
    Football,
    Soccer,
    Hockey,
    Baseball,
    Rugby,
    Volleyball,
}

impl Sport {
    /// Point values offered as buttons, in display order
    pub fn button_values(self) -> &'static [u32] {
        match self {
            Sport::Basketball => &[1, 2, 3],
            // safety, field goal, touchdown; extra points use the 1 and 2
            Sport::Football => &[1, 2, 3, 6],
            Sport::Soccer | Sport::Hockey | Sport::Volleyball => &[1],
            Sport::Baseball => &[1, 2, 3, 4],
            Sport::Rugby => &[2, 3, 5],
        }
    }

    /// All presets, in the order they are offered to the user
    pub fn all() -> &'static [Sport] {
        &[
            Sport::Basketball,
            Sport::Football,
            Sport::Soccer,
            Sport::Hockey,
            Sport::Baseball,
            Sport::Rugby,
            Sport::Volleyball,
        ]
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sport::Basketball => "basketball",
            Sport::Football => "football",
            Sport::Soccer => "soccer",
            Sport::Hockey => "hockey",
            Sport::Baseball => "baseball",
            Sport::Rugby => "rugby",
            Sport::Volleyball => "volleyball",
        };
        f.write_str(name)
    }
}
