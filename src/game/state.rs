//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::options::GameOptions;
use crate::participant::Participant;
use crate::shoe::ShoeSnapshot;

/// Phase of a table. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GameState {
    /// Players may join; no cards dealt.
    Waiting,
    /// Dealing and player actions are allowed.
    InProgress,
    /// Outcomes are settled; nothing changes any more.
    Finished,
}

/// Everything a session store needs to persist a table between calls.
///
/// Hand totals are not part of the snapshot; they are recomputed from the
/// cards on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSnapshot {
    /// The table's options.
    pub options: GameOptions,
    /// The table's invite code.
    pub invite_code: String,
    /// Current phase.
    pub state: GameState,
    /// Seated players in joining order.
    pub players: Vec<Participant>,
    /// The dealer.
    pub dealer: Participant,
    /// The shoe sequence and cursor.
    pub shoe: ShoeSnapshot,
}
