use std::fmt;

use serde::{Deserialize, Serialize};

/// Static political-lean label for a publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoliticalLean {
    Right,
    CenterLeft,
    Center,
    Unknown,
}

impl PoliticalLean {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoliticalLean::Right => "right",
            PoliticalLean::CenterLeft => "center-left",
            PoliticalLean::Center => "center",
            PoliticalLean::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PoliticalLean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
