//! Color theme selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// UI theme. Switched at runtime by the `theme` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Returns the lowercase name used by the `theme` command.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses the exact argument accepted by `theme` (`dark` or `light`).
    ///
    /// Matching is case-sensitive: `theme Dark` is a usage error.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    /// Lenient parse for config files and CLI flags (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_arg(s.trim().to_lowercase().as_str())
            .ok_or_else(|| anyhow::anyhow!("Unknown theme '{s}' (expected 'dark' or 'light')"))
    }
}
