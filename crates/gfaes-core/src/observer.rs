//! Hooks for watching the cipher state between rounds.

use crate::block::Block;

/// Number of rounds in AES-128.
pub const ROUNDS: usize = 10;

/// Shape of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundKind {
    /// SubBytes, ShiftRows, MixColumns, AddRoundKey (rounds 1 to 9).
    Full,
    /// SubBytes, ShiftRows, AddRoundKey (round 10).
    Final,
}

impl RoundKind {
    /// Kind of the 1-based `round`.
    pub fn of(round: usize) -> Self {
        if round == ROUNDS {
            Self::Final
        } else {
            Self::Full
        }
    }

    /// Whether MixColumns ran in this round.
    pub fn mixes_columns(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Receives the state after every completed round.
pub trait RoundObserver {
    /// Called once per round with the 1-based round number.
    fn on_round(&mut self, round: usize, kind: RoundKind, state: &Block);
}

impl<F> RoundObserver for F
where
    F: FnMut(usize, RoundKind, &Block),
{
    fn on_round(&mut self, round: usize, kind: RoundKind, state: &Block) {
        self(round, kind, state)
    }
}

/// Observer that ignores every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    #[inline]
    fn on_round(&mut self, _round: usize, _kind: RoundKind, _state: &Block) {}
}

/// One recorded round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: usize,
    /// Full or final round.
    pub kind: RoundKind,
    /// State after the round's AddRoundKey.
    pub state: Block,
}

/// Observer that keeps every intermediate state.
#[derive(Clone, Debug, Default)]
pub struct RoundTrace {
    records: Vec<RoundRecord>,
}

impl RoundTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded rounds in execution order.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// State after `round`, if it was recorded.
    pub fn state_after(&self, round: usize) -> Option<&Block> {
        self.records
            .iter()
            .find(|record| record.round == round)
            .map(|record| &record.state)
    }
}

impl RoundObserver for RoundTrace {
    fn on_round(&mut self, round: usize, kind: RoundKind, state: &Block) {
        self.records.push(RoundRecord {
            round,
            kind,
            state: *state,
        });
    }
}
