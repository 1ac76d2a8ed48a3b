//! Interactive game state
//!
//! [`GameSession`] consumes hover/click/give-up/regenerate events and returns
//! [`Instruction`]s for whatever is drawing the board.

mod game;
mod highlight;
mod instruction;

pub use game::{GameSession, INDICATOR_COUNT, MAX_WRONG_WORDS, MatchRange, SessionPhase};
pub use highlight::{CellStyle, HighlightState};
pub use instruction::{IndicatorStatus, Instruction, Notification};
