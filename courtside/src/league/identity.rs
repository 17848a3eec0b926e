//! Cross-tournament entity resolution.
//!
//! Rows from independent tournament registrations are linked in two tiers:
//! 1. Exact account-id match
//! 2. Normalized display-name match, when the rows cannot be told apart by
//!    account id (at least one side has none)
//!
//! Within one tournament, rows sharing an entity id are the same participant
//! and a name match never picks a slot another row of that tournament
//! already holds, so namesakes in the same field stay apart.
//!
//! Removing the second tier is all a move to fully stable identifiers needs.

use crate::{
    scoring::normalize_name,
    standings::{EntityId, StandingRow},
};
use std::collections::{HashMap, HashSet};

/// Maps standing rows to slots in a league table
#[derive(Debug, Default)]
pub struct IdentityResolver {
    by_account: HashMap<String, usize>,
    /// Slots per normalized name, in opening order
    by_name: HashMap<String, Vec<usize>>,
    /// Account id bound to each slot
    slot_accounts: Vec<Option<String>>,
    /// Current tournament only
    by_entity: HashMap<EntityId, usize>,
    claimed: HashSet<usize>,
}

/// Where a row landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Matched an existing slot
    Existing(usize),
    /// Opened a new slot at the next index
    New(usize),
}

impl Resolution {
    pub fn slot(self) -> usize {
        match self {
            Resolution::Existing(slot) | Resolution::New(slot) => slot,
        }
    }
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots opened so far
    pub fn len(&self) -> usize {
        self.slot_accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_accounts.is_empty()
    }

    /// Start resolving the rows of the next tournament
    pub fn begin_tournament(&mut self) {
        self.by_entity.clear();
        self.claimed.clear();
    }

    /// Resolve a row to a slot, opening one when nothing matches
    pub fn resolve(&mut self, row: &StandingRow) -> Resolution {
        if let Some(&slot) = self.by_entity.get(&row.entity_id) {
            return Resolution::Existing(slot);
        }

        let resolution = self.link(row);
        let slot = resolution.slot();
        self.by_entity.insert(row.entity_id.clone(), slot);
        self.claimed.insert(slot);
        resolution
    }

    fn link(&mut self, row: &StandingRow) -> Resolution {
        let account = row.account_id.as_deref();

        if let Some(account) = account
            && let Some(&slot) = self.by_account.get(account)
        {
            return Resolution::Existing(slot);
        }

        let name = normalize_name(&row.display_name);
        let candidate = self.by_name.get(&name).and_then(|slots| {
            slots.iter().copied().find(|slot| {
                // two different accounts sharing a name stay apart
                !self.claimed.contains(slot) && (account.is_none() || self.slot_accounts[*slot].is_none())
            })
        });
        if let Some(slot) = candidate {
            if let Some(account) = account {
                self.slot_accounts[slot] = Some(account.to_string());
                self.by_account.insert(account.to_string(), slot);
            }
            return Resolution::Existing(slot);
        }

        let slot = self.slot_accounts.len();
        self.slot_accounts.push(account.map(str::to_string));
        if let Some(account) = account {
            self.by_account.insert(account.to_string(), slot);
        }
        self.by_name.entry(name).or_default().push(slot);
        Resolution::New(slot)
    }

    /// Account id bound to a slot, if any
    pub fn account(&self, slot: usize) -> Option<&str> {
        self.slot_accounts.get(slot).and_then(|a| a.as_deref())
    }
}
