//! Draft/saved parlay state machine
//!
//! Pure in-memory state: `Idle` or `Drafting` plus the saved collection.
//! Persistence is split into `prepare_*` (compute the collection to write)
//! and `commit_*` (apply it after the write succeeded), so a failed write
//! never touches this state.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::{Parlay, ParlayError, ParlayId, SaveOutcome, MAX_LEGS};
use crate::leg::{Leg, LegId};

/// Stakes are whole cents
const STAKE_DP: u32 = 2;

/// Lifecycle state as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Drafting,
}

/// Owns the draft parlay and the saved collection for one session
#[derive(Debug, Clone)]
pub struct ParlayBook {
    draft: Option<Parlay>,
    saved: Vec<Parlay>,
    default_stake: Decimal,
    last_id: ParlayId,
}

impl ParlayBook {
    /// Create a book over an already loaded collection
    pub fn new(saved: Vec<Parlay>, default_stake: Decimal) -> Self {
        let last_id = saved.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            draft: None,
            saved,
            default_stake,
            last_id,
        }
    }

    pub fn state(&self) -> LifecycleState {
        if self.draft.is_some() {
            LifecycleState::Drafting
        } else {
            LifecycleState::Idle
        }
    }

    pub fn draft(&self) -> Option<&Parlay> {
        self.draft.as_ref()
    }

    pub fn saved(&self) -> &[Parlay] {
        &self.saved
    }

    /// `Idle → Drafting` with an empty draft at the default stake
    pub fn start(&mut self) -> Result<&Parlay, ParlayError> {
        self.start_at(Utc::now())
    }

    pub(crate) fn start_at(&mut self, now: DateTime<Utc>) -> Result<&Parlay, ParlayError> {
        if self.draft.is_some() {
            return Err(ParlayError::DraftInProgress);
        }
        let id = self.next_id(now)?;
        tracing::info!(parlay_id = id, "Started parlay draft");
        let draft = Parlay::new(id, now, self.default_stake);
        Ok(&*self.draft.insert(draft))
    }

    /// Append a leg; the 11th leg is rejected and the draft left unchanged
    pub fn add_leg(&mut self, leg: Leg) -> Result<usize, ParlayError> {
        let draft = self.draft_mut()?;
        if draft.is_full() {
            tracing::warn!(parlay_id = draft.id, "Leg rejected: parlay is full");
            return Err(ParlayError::CapacityExceeded { max: MAX_LEGS });
        }
        tracing::debug!(parlay_id = draft.id, leg = %leg.describe(), "Added leg");
        draft.legs.push(leg);
        Ok(draft.legs.len())
    }

    /// Remove a leg by id; an unknown id is a no-op
    pub fn remove_leg(&mut self, id: LegId) -> Result<Option<Leg>, ParlayError> {
        let draft = self.draft_mut()?;
        let removed = draft
            .legs
            .iter()
            .position(|leg| leg.id == id)
            .map(|index| draft.legs.remove(index));
        Ok(removed)
    }

    /// Change the stake, rounded to cents; non-positive amounts keep the
    /// previous stake
    pub fn set_stake(&mut self, amount: Decimal) -> Result<Decimal, ParlayError> {
        let draft = self.draft_mut()?;
        let amount = amount.round_dp_with_strategy(STAKE_DP, RoundingStrategy::MidpointAwayFromZero);
        if amount <= Decimal::ZERO {
            return Err(ParlayError::InvalidStake(format!(
                "{amount} is not positive; keeping {}",
                draft.bet_amount
            )));
        }
        draft.bet_amount = amount;
        Ok(amount)
    }

    /// Change the stake from user text; unparsable input keeps the previous stake
    pub fn set_stake_input(&mut self, raw: &str) -> Result<Decimal, ParlayError> {
        let current = self.draft_mut()?.bet_amount;
        let trimmed = raw.trim().trim_start_matches('$');
        let amount = Decimal::from_str(trimmed).map_err(|_| {
            ParlayError::InvalidStake(format!("{raw:?} is not a number; keeping {current}"))
        })?;
        self.set_stake(amount)
    }

    /// `Drafting → Idle`, discarding the draft
    pub fn cancel(&mut self) -> Result<Parlay, ParlayError> {
        let draft = self.draft.take().ok_or(ParlayError::NotDrafting)?;
        tracing::info!(parlay_id = draft.id, "Discarded parlay draft");
        Ok(draft)
    }

    /// Collection to persist for a save, or `None` when the draft is empty
    pub(crate) fn prepare_save(&self) -> Result<Option<Vec<Parlay>>, ParlayError> {
        let draft = self.draft.as_ref().ok_or(ParlayError::NotDrafting)?;
        if draft.legs.is_empty() {
            return Ok(None);
        }
        let mut collection = self.saved.clone();
        collection.push(draft.clone());
        Ok(Some(collection))
    }

    /// Move the draft into the saved collection and return to `Idle`.
    ///
    /// A draft without legs stays in place and nothing is saved.
    pub(crate) fn commit_save(&mut self) -> Result<SaveOutcome, ParlayError> {
        if self.draft.as_ref().ok_or(ParlayError::NotDrafting)?.legs.is_empty() {
            return Ok(SaveOutcome::Empty);
        }
        let Some(draft) = self.draft.take() else {
            return Err(ParlayError::NotDrafting);
        };
        let id = draft.id;
        tracing::info!(parlay_id = id, legs = draft.legs.len(), "Saved parlay");
        self.saved.push(draft);
        Ok(SaveOutcome::Saved(id))
    }

    /// Collection to persist after deleting `id`, or `None` if it is not saved
    pub(crate) fn prepare_delete(&self, id: ParlayId) -> Option<Vec<Parlay>> {
        if !self.saved.iter().any(|p| p.id == id) {
            return None;
        }
        Some(self.saved.iter().filter(|p| p.id != id).cloned().collect())
    }

    /// Drop `id` from the saved collection
    pub(crate) fn commit_delete(&mut self, id: ParlayId) -> bool {
        let before = self.saved.len();
        self.saved.retain(|p| p.id != id);
        let removed = self.saved.len() != before;
        if removed {
            tracing::info!(parlay_id = id, "Deleted parlay");
        }
        removed
    }

    fn draft_mut(&mut self) -> Result<&mut Parlay, ParlayError> {
        self.draft.as_mut().ok_or(ParlayError::NotDrafting)
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> Result<ParlayId, ParlayError> {
        let after_last = self
            .last_id
            .checked_add(1)
            .ok_or(ParlayError::IdsExhausted { last: self.last_id })?;
        let id = now.timestamp_millis().max(after_last);
        self.last_id = id;
        Ok(id)
    }
}
