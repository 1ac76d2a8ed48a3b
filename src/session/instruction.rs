//! Output of the session: what the presentation layer should change

use crate::core::CellPos;
use std::fmt;

/// User-facing notifications appended to the message log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    SecretFound,
    /// A decoy was clicked; carries its positional likeness to the secret
    FoundWord(u8),
    MatchFound,
    /// A bracket match had no decoy left to remove
    Error,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretFound => write!(f, "Secret found"),
            Self::FoundWord(likeness) => write!(f, "Found word: {likeness}"),
            Self::MatchFound => write!(f, "Match found"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// State of one of the three attempt indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStatus {
    #[default]
    Intact,
    Wrong,
}

/// A single rendering step produced by a session event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Board contents changed; redraw every cell from the session
    RenderBoard,
    SetPersistentHighlight(Vec<CellPos>),
    SetTransientHighlight(Vec<CellPos>),
    ClearTransientHighlight,
    AppendMessage(Notification),
    SetStatusIndicator {
        index: usize,
        status: IndicatorStatus,
    },
    /// Mark the secret's cells with the revealed-answer style
    RevealSecret(Vec<CellPos>),
}

impl Instruction {
    /// The notification carried by this instruction, if any
    #[must_use]
    pub const fn notification(&self) -> Option<Notification> {
        match self {
            Self::AppendMessage(n) => Some(*n),
            _ => None,
        }
    }
}
